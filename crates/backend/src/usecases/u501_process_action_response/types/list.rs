use contracts::domain::a004_listing_product::aggregate::ListingProduct;
use contracts::enums::listing_status::ListingStatus;
use serde_json::Value;

use super::{ActionTypeResponse, SuccessContext};

/// Успех первичного размещения: канал присвоил товару идентичность
pub struct ListResponse;

impl ActionTypeResponse for ListResponse {
    fn successful_message(&self) -> &'static str {
        "Product was successfully Listed"
    }

    fn apply_success(&self, product: &mut ListingProduct, ctx: &SuccessContext<'_>) {
        let sku = ctx
            .response_data
            .get("sku")
            .and_then(Value::as_str)
            .map(|s| s.to_string())
            .or_else(|| ctx.request_data.sku());

        let item_id = ctx
            .response_data
            .get("wpid")
            .or_else(|| ctx.response_data.get("item_id"))
            .and_then(Value::as_str)
            .map(|s| s.to_string());

        product.assign_channel_identity(sku, item_id);

        if ctx.configurator.price {
            product.online_price = ctx.request_data.price();
        }
        if ctx.configurator.qty {
            product.online_qty = ctx.request_data.qty();
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

    fn product() -> ListingProduct {
        ListingProduct::new_for_insert(
            "LP-1".into(),
            "Test".into(),
            "l".into(),
            "a".into(),
            "m".into(),
            1,
            VariationRole::Individual,
            None,
        )
    }

    #[test]
    fn test_list_success_assigns_identity_and_status() {
        let mut p = product();
        let response = json!({"sku": "SKU-1", "wpid": "WP-100"});
        let request = RequestData::new(json!({"qty": 7, "price": 19.99}));
        let configurator = ActionConfigurator::full();

        ListResponse.apply_success(
            &mut p,
            &SuccessContext {
                response_data: &response,
                request_data: &request,
                configurator: &configurator,
                status_changer: StatusChanger::User,
            },
        );

        assert_eq!(p.online_sku.as_deref(), Some("SKU-1"));
        assert_eq!(p.channel_item_id.as_deref(), Some("WP-100"));
        assert_eq!(p.status, ListingStatus::Listed);
        assert_eq!(p.status_changer, StatusChanger::User);
        assert_eq!(p.online_qty, Some(7));
        assert_eq!(p.online_price, Some(19.99));
    }

    #[test]
    fn test_list_success_falls_back_to_request_sku() {
        let mut p = product();
        let response = json!({"sku": null, "item_id": "IT-5"});
        let request = RequestData::new(json!({"sku": "REQ-SKU"}));
        let configurator = ActionConfigurator::full();

        ListResponse.apply_success(
            &mut p,
            &SuccessContext {
                response_data: &response,
                request_data: &request,
                configurator: &configurator,
                status_changer: StatusChanger::Synch,
            },
        );

        assert_eq!(p.online_sku.as_deref(), Some("REQ-SKU"));
        assert_eq!(p.channel_item_id.as_deref(), Some("IT-5"));
    }
}
