use contracts::domain::a001_marketplace::aggregate::Marketplace;
use contracts::enums::marketplace_component::MarketplaceComponent;

use crate::domain::a001_marketplace;

/// Засеять справочник площадок при первом запуске
pub async fn ensure_marketplaces_seeded() -> anyhow::Result<()> {
    if !a001_marketplace::repository::list_all().await?.is_empty() {
        return Ok(());
    }

    tracing::info!("Seeding default marketplaces");

    for component in MarketplaceComponent::all() {
        let (channel_id, title, url) = match component {
            MarketplaceComponent::Ebay => ("EBAY_US", "eBay US", "ebay.com"),
            MarketplaceComponent::Amazon => ("ATVPDKIKX0DER", "Amazon.com", "amazon.com"),
            MarketplaceComponent::Walmart => ("WALMART_US", "Walmart US", "walmart.com"),
        };

        let marketplace = Marketplace::new_for_insert(
            format!("MP-{}", channel_id),
            title.to_string(),
            component,
            channel_id.to_string(),
            url.to_string(),
        );
        a001_marketplace::repository::insert(&marketplace).await?;
    }

    Ok(())
}
