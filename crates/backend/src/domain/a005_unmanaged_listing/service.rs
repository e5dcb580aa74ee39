use super::repository;
use contracts::domain::a005_unmanaged_listing::aggregate::UnmanagedListing;
use contracts::enums::listing_status::ListingStatus;
use contracts::usecases::u503_sync_unmanaged_listings::channel::ChannelListingEntry;
use uuid::Uuid;

/// Статус позиции в обозначениях канала → статус листинга
fn status_from_channel(status: Option<&str>) -> ListingStatus {
    match status.map(|s| s.to_uppercase()) {
        Some(s) if s == "ACTIVE" || s == "PUBLISHED" => ListingStatus::Listed,
        Some(s) if s == "RETIRED" || s == "INACTIVE" || s == "UNPUBLISHED" => {
            ListingStatus::Stopped
        }
        Some(s) if s == "BLOCKED" => ListingStatus::Blocked,
        _ => ListingStatus::NotListed,
    }
}

/// Создать сторонний листинг из позиции снимка канала
pub async fn create_from_channel(
    account_ref: &str,
    marketplace_ref: &str,
    entry: &ChannelListingEntry,
) -> anyhow::Result<Uuid> {
    let description = entry
        .title
        .clone()
        .unwrap_or_else(|| entry.sku.clone());

    let mut aggregate = UnmanagedListing::new_for_insert(
        format!("UNM-{}", entry.sku),
        description,
        account_ref.to_string(),
        marketplace_ref.to_string(),
        entry.sku.clone(),
        entry.item_id.clone(),
        entry.price,
        entry.qty,
        status_from_channel(entry.status.as_deref()),
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Обновить существующий сторонний листинг данными снимка канала
pub async fn update_from_channel(
    aggregate: &mut UnmanagedListing,
    entry: &ChannelListingEntry,
) -> anyhow::Result<()> {
    if let Some(title) = &entry.title {
        aggregate.base.description = title.clone();
    }
    if entry.item_id.is_some() {
        aggregate.channel_item_id = entry.item_id.clone();
    }
    aggregate.online_price = entry.price;
    aggregate.online_qty = entry.qty;
    aggregate.status = status_from_channel(entry.status.as_deref());

    aggregate.before_write();
    repository::update(aggregate).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_channel() {
        assert_eq!(status_from_channel(Some("ACTIVE")), ListingStatus::Listed);
        assert_eq!(status_from_channel(Some("active")), ListingStatus::Listed);
        assert_eq!(status_from_channel(Some("RETIRED")), ListingStatus::Stopped);
        assert_eq!(status_from_channel(Some("BLOCKED")), ListingStatus::Blocked);
        assert_eq!(status_from_channel(None), ListingStatus::NotListed);
        assert_eq!(
            status_from_channel(Some("SOMETHING_ELSE")),
            ListingStatus::NotListed
        );
    }
}
