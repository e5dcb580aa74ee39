use contracts::domain::a004_listing_product::aggregate::ListingProduct;

use super::{ActionTypeResponse, SuccessContext};

/// Успех ревизии: обновились только аспекты, включённые в конфигураторе.
/// Статус товара ревизия не меняет.
pub struct ReviseResponse;

impl ActionTypeResponse for ReviseResponse {
    fn successful_message(&self) -> &'static str {
        "Product was successfully Revised"
    }

    fn apply_success(&self, product: &mut ListingProduct, ctx: &SuccessContext<'_>) {
        if ctx.configurator.qty && ctx.request_data.has_qty() {
            product.online_qty = ctx.request_data.qty();
        }
        if ctx.configurator.price && ctx.request_data.has_price() {
            product.online_price = ctx.request_data.price();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_listing_product::aggregate::VariationRole;
    use contracts::enums::listing_status::ListingStatus;
    use contracts::enums::status_changer::StatusChanger;
    use contracts::usecases::u501_process_action_response::configurator::ActionConfigurator;
    use serde_json::json;

    use crate::usecases::u501_process_action_response::request_data::RequestData;

    fn listed_product() -> ListingProduct {
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
        p.set_status(ListingStatus::Listed, StatusChanger::User);
        p.online_qty = Some(10);
        p.online_price = Some(100.0);
        p
    }

    #[test]
    fn test_revise_respects_configurator_flags() {
        let mut p = listed_product();
        let response = json!({"sku": "SKU-1"});
        let request = RequestData::new(json!({"qty": 5, "price": 90.0}));
        // ревизия только остатков
        let configurator = ActionConfigurator::partial(true, false, false, false);

        ReviseResponse.apply_success(
            &mut p,
            &SuccessContext {
                response_data: &response,
                request_data: &request,
                configurator: &configurator,
                status_changer: StatusChanger::Synch,
            },
        );

        assert_eq!(p.online_qty, Some(5));
        // цена не тронута, хотя в запросе была
        assert_eq!(p.online_price, Some(100.0));
        assert_eq!(p.status, ListingStatus::Listed);
    }

    #[test]
    fn test_revise_ignores_fields_absent_from_request() {
        let mut p = listed_product();
        let response = json!({"sku": "SKU-1"});
        let request = RequestData::new(json!({"price": 80.0}));
        let configurator = ActionConfigurator::full();

        ReviseResponse.apply_success(
            &mut p,
            &SuccessContext {
                response_data: &response,
                request_data: &request,
                configurator: &configurator,
                status_changer: StatusChanger::Synch,
            },
        );

        // qty в запросе не было — остаток остаётся прежним
        assert_eq!(p.online_qty, Some(10));
        assert_eq!(p.online_price, Some(80.0));
    }
}
