use contracts::domain::a001_marketplace::aggregate::Marketplace;
use contracts::domain::a004_listing_product::aggregate::VariationRole;
use contracts::enums::marketplace_component::MarketplaceComponent;
use contracts::enums::sync_task_type::SyncTaskType;
use uuid::Uuid;

use crate::domain::a001_marketplace;
use crate::domain::a004_listing_product;
use crate::shared::logger;
use crate::system::locks::{LockItemManager, LockItemProgress};
use crate::usecases::u501_process_action_response::parent_processor;

/// Семейство задачи: общая синхронизация данных площадки
pub fn task_type() -> SyncTaskType {
    SyncTaskType::General
}

/// Nick блокировки синхронизации площадок.
/// Фиксированная константа на компонент: один запуск на внешнюю систему.
pub fn marketplace_sync_lock_nick(component: MarketplaceComponent) -> String {
    format!("{}_marketplace_synchronization", component.code())
}

/// Запустить синхронизацию площадки немедленно.
///
/// Если блокировка уже существует, другой экземпляр работает —
/// молча выходим, это не ошибка. Блокировка снимается на любом
/// пути выхода из тела задачи.
pub async fn run_sync_now(marketplace_id: Uuid) -> anyhow::Result<()> {
    let marketplace = a001_marketplace::repository::get_by_id(marketplace_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Marketplace {} not found", marketplace_id))?;

    let lock = LockItemManager::new(marketplace_sync_lock_nick(marketplace.component));

    if lock.is_exist().await? {
        tracing::info!(
            "Marketplace synchronization for '{}' is already running, skipping",
            marketplace.base.description
        );
        return Ok(());
    }

    if !lock.create().await? {
        // проигранная гонка за блокировку равносильна «уже работает»
        tracing::info!("Lost the race for '{}' sync lock, skipping", lock.nick());
        return Ok(());
    }

    let mut progress = LockItemProgress::new(
        lock.nick(),
        format!(
            "{} {} Site",
            marketplace.base.description,
            marketplace.component.display_name()
        ),
    );

    let result = run_sync(&marketplace, &mut progress).await;

    // ошибка тела задачи не должна потеряться из-за ошибки снятия
    if let Err(e) = lock.remove().await {
        tracing::error!("Failed to release lock '{}': {}", lock.nick(), e);
    }

    result
}

async fn run_sync(
    marketplace: &Marketplace,
    progress: &mut LockItemProgress,
) -> anyhow::Result<()> {
    tracing::info!(
        "Starting marketplace synchronization: {}",
        marketplace.base.description
    );
    let marketplace_ref = marketplace.to_string_id();

    progress.set_details("Re-deriving variation parents").await;
    progress.set_percentage(20).await;

    let products = a004_listing_product::repository::list_by_marketplace_ref(&marketplace_ref).await?;
    for product in &products {
        if product.variation_role != VariationRole::RelationParent {
            continue;
        }
        let mut parent = product.clone();
        parent_processor::process(&mut parent).await?;
    }

    progress.set_details("Refreshing listing counters").await;
    progress.set_percentage(70).await;

    let (total, active) =
        a004_listing_product::repository::count_by_marketplace_ref(&marketplace_ref).await?;

    let mut updated = marketplace.clone();
    updated.products_total = total;
    updated.products_active = active;
    updated.last_sync_at = Some(chrono::Utc::now());
    updated.before_write();
    a001_marketplace::repository::update(&updated).await?;

    progress.set_details("Completed").await;
    progress.set_percentage(100).await;

    logger::log(
        "sync",
        &format!(
            "Marketplace '{}' synchronized: {} products, {} active",
            marketplace.base.description, total, active
        ),
    );
    tracing::info!(
        "Marketplace synchronization completed: {} (total={}, active={})",
        marketplace.base.description,
        total,
        active
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_listing_product::aggregate::ListingProduct;
    use contracts::enums::listing_status::ListingStatus;
    use contracts::enums::status_changer::StatusChanger;

    use crate::shared::data::db;
    use crate::system::locks::repository as locks;

    async fn init_test_db() {
        let path = std::env::temp_dir().join(format!("backend-test-{}.db", std::process::id()));
        db::initialize_database(Some(path.to_str().unwrap()))
            .await
            .unwrap();
    }

    async fn seed_marketplace(component: MarketplaceComponent) -> Marketplace {
        let marketplace = Marketplace::new_for_insert(
            format!("MP-{}", component.code()),
            format!("{} Test Site", component.display_name()),
            component,
            "SITE_1".into(),
            "example.com".into(),
        );
        a001_marketplace::repository::insert(&marketplace)
            .await
            .unwrap();
        marketplace
    }

    #[test]
    fn test_task_family_is_general() {
        assert_eq!(task_type(), SyncTaskType::General);
    }

    #[tokio::test]
    async fn test_sync_refreshes_counters_and_releases_lock() {
        init_test_db().await;
        let marketplace = seed_marketplace(MarketplaceComponent::Ebay).await;
        let marketplace_ref = marketplace.to_string_id();

        let mut listed = ListingProduct::new_for_insert(
            "LP-S1".into(),
            "Synced one".into(),
            "l".into(),
            "a".into(),
            marketplace_ref.clone(),
            1,
            contracts::domain::a004_listing_product::aggregate::VariationRole::Individual,
            None,
        );
        listed.set_status(ListingStatus::Listed, StatusChanger::User);
        a004_listing_product::repository::insert(&listed).await.unwrap();

        let stopped = ListingProduct::new_for_insert(
            "LP-S2".into(),
            "Synced two".into(),
            "l".into(),
            "a".into(),
            marketplace_ref.clone(),
            2,
            contracts::domain::a004_listing_product::aggregate::VariationRole::Individual,
            None,
        );
        a004_listing_product::repository::insert(&stopped).await.unwrap();

        run_sync_now(marketplace.base.id.value()).await.unwrap();

        let stored = a001_marketplace::repository::get_by_id(marketplace.base.id.value())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.products_total, 2);
        assert_eq!(stored.products_active, 1);
        assert!(stored.last_sync_at.is_some());

        // блокировка снята после завершения
        let nick = marketplace_sync_lock_nick(MarketplaceComponent::Ebay);
        assert!(!locks::exists(&nick).await.unwrap());
    }

    #[tokio::test]
    async fn test_sync_is_noop_when_lock_is_held() {
        init_test_db().await;
        let marketplace = seed_marketplace(MarketplaceComponent::Walmart).await;

        let nick = marketplace_sync_lock_nick(MarketplaceComponent::Walmart);
        locks::remove(&nick).await.unwrap();
        assert!(locks::create(&nick).await.unwrap());

        // занятая блокировка — не ошибка, а молчаливый выход
        run_sync_now(marketplace.base.id.value()).await.unwrap();
        run_sync_now(marketplace.base.id.value()).await.unwrap();

        let stored = a001_marketplace::repository::get_by_id(marketplace.base.id.value())
            .await
            .unwrap()
            .unwrap();
        // тело задачи не выполнялось
        assert!(stored.last_sync_at.is_none());

        // чужая блокировка осталась на месте
        assert!(locks::exists(&nick).await.unwrap());
        locks::remove(&nick).await.unwrap();
    }
}
