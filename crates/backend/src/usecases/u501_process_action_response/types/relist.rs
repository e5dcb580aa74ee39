use contracts::domain::a004_listing_product::aggregate::ListingProduct;
use contracts::enums::listing_status::ListingStatus;

use super::{ActionTypeResponse, SuccessContext};

/// Успех повторного размещения остановленного товара
pub struct RelistResponse;

impl ActionTypeResponse for RelistResponse {
    fn successful_message(&self) -> &'static str {
        "Product was successfully Relisted"
    }

    fn apply_success(&self, product: &mut ListingProduct, ctx: &SuccessContext<'_>) {
        if ctx.configurator.qty {
            if let Some(qty) = ctx.request_data.qty() {
                product.online_qty = Some(qty);
            }
        }
        if ctx.configurator.price {
            if let Some(price) = ctx.request_data.price() {
                product.online_price = Some(price);
            }
        }

        product.set_status(ListingStatus::Listed, ctx.status_changer);
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
    fn test_relist_restores_listed_status() {
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
        p.set_status(ListingStatus::Stopped, StatusChanger::User);
        p.online_qty = Some(0);

        let response = json!({"sku": "SKU-1"});
        let request = RequestData::new(json!({"qty": 3}));
        let configurator = ActionConfigurator::full();

        RelistResponse.apply_success(
            &mut p,
            &SuccessContext {
                response_data: &response,
                request_data: &request,
                configurator: &configurator,
                status_changer: StatusChanger::Synch,
            },
        );

        assert_eq!(p.status, ListingStatus::Listed);
        assert_eq!(p.online_qty, Some(3));
    }
}
