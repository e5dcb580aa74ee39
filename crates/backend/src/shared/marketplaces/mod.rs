pub mod amazon;
pub mod ebay;
pub mod walmart;

use contracts::enums::marketplace_component::MarketplaceComponent;

/// Публичная ссылка на позицию на сайте канала
pub fn channel_item_url(component: MarketplaceComponent, domain: &str, item_id: &str) -> String {
    match component {
        MarketplaceComponent::Ebay => ebay::item_url(domain, item_id),
        MarketplaceComponent::Amazon => amazon::item_url(domain, item_id),
        MarketplaceComponent::Walmart => walmart::item_url(domain, item_id),
    }
}
