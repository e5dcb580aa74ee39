use contracts::domain::a004_listing_product::aggregate::ListingProduct;
use contracts::enums::listing_status::ListingStatus;

use super::{ActionTypeResponse, SuccessContext};

/// Успех снятия с продажи: позиция остаётся на канале с нулевым остатком
pub struct StopResponse;

impl ActionTypeResponse for StopResponse {
    fn successful_message(&self) -> &'static str {
        "Product was successfully Stopped"
    }

    fn apply_success(&self, product: &mut ListingProduct, ctx: &SuccessContext<'_>) {
        product.online_qty = Some(0);
        product.set_status(ListingStatus::Stopped, ctx.status_changer);
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
    fn test_stop_zeroes_qty_and_keeps_identity() {
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
        p.online_qty = Some(25);

        let response = json!({"sku": "SKU-1"});
        let request = RequestData::new(json!({}));
        let configurator = ActionConfigurator::full();

        StopResponse.apply_success(
            &mut p,
            &SuccessContext {
                response_data: &response,
                request_data: &request,
                configurator: &configurator,
                status_changer: StatusChanger::User,
            },
        );

        assert_eq!(p.status, ListingStatus::Stopped);
        assert_eq!(p.online_qty, Some(0));
        // идентичность канала сохраняется — товар можно перезапустить
        assert_eq!(p.online_sku.as_deref(), Some("SKU-1"));
    }
}
