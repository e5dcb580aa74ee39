use contracts::domain::a004_listing_product::aggregate::ListingProduct;
use contracts::enums::listing_status::ListingStatus;
use serde_json::Value;

use super::{ActionTypeResponse, SuccessContext};

/// Успех полного снятия позиции с канала
pub struct RetireResponse;

impl ActionTypeResponse for RetireResponse {
    fn successful_message(&self) -> &'static str {
        "Product was successfully Retired from the Channel"
    }

    /// Ответ на снятие канал может подтверждать и через wpid
    fn is_valid_response_shape(&self, response: &Value) -> bool {
        response.get("sku").is_some()
            || response.get("wpid").is_some()
            || response.get("errors").is_some()
    }

    fn apply_success(&self, product: &mut ListingProduct, ctx: &SuccessContext<'_>) {
        product.drop_channel_identity();
        product.set_status(ListingStatus::NotListed, ctx.status_changer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_listing_product::aggregate::VariationRole;
    use contracts::enums::status_changer::StatusChanger;
    use contracts::usecases::u501_process_action_response::configurator::ActionConfigurator;
    use serde_json::json;

    use crate::usecases::u501_process_action_response::request_data::RequestData;

    #[test]
    fn test_retire_clears_channel_identity() {
        let mut p = ListingProduct::new_for_insert(
            "LP-1".into(),
            "Test".into(),
            "l".into(),
            "a".into(),
            "m".into(),
            1,
            VariationRole::Individual,
            None,
        );
        p.assign_channel_identity(Some("SKU-1".into()), Some("WP-1".into()));
        p.set_status(ListingStatus::Listed, StatusChanger::User);

        let response = json!({"sku": "SKU-1"});
        let request = RequestData::new(json!({}));
        let configurator = ActionConfigurator::full();

        RetireResponse.apply_success(
            &mut p,
            &SuccessContext {
                response_data: &response,
                request_data: &request,
                configurator: &configurator,
                status_changer: StatusChanger::User,
            },
        );

        assert_eq!(p.status, ListingStatus::NotListed);
        assert!(!p.has_channel_identity());
    }

    #[test]
    fn test_retire_accepts_wpid_only_response() {
        assert!(RetireResponse.is_valid_response_shape(&json!({"wpid": "WP-1"})));
        assert!(!RetireResponse.is_valid_response_shape(&json!({"ack": true})));
    }
}
