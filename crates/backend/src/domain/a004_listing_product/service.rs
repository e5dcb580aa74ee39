use super::repository;
use contracts::domain::a004_listing_product::aggregate::ListingProduct;
use uuid::Uuid;

/// Создание нового товара листинга
pub async fn create(mut aggregate: ListingProduct) -> anyhow::Result<Uuid> {
    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Сохранение изменений существующего товара листинга
pub async fn save(aggregate: &mut ListingProduct) -> anyhow::Result<()> {
    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::update(aggregate).await
}

/// Получение товара по ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<ListingProduct>> {
    repository::get_by_id(id).await
}
