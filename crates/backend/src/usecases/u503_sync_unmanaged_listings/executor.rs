use contracts::domain::a002_account::aggregate::Account;
use contracts::enums::sync_task_type::SyncTaskType;
use contracts::usecases::u503_sync_unmanaged_listings::channel::ChannelListingEntry;
use uuid::Uuid;

use crate::domain::a002_account;
use crate::domain::a004_listing_product;
use crate::domain::a005_unmanaged_listing;
use crate::shared::data::raw_storage;
use crate::system::locks::{LockItemManager, LockItemProgress};

/// Тип документа в сыром хранилище, под которым транспортный слой
/// складывает снимки листингов аккаунта
const SNAPSHOT_DOCUMENT_TYPE: &str = "channel_listings";

/// Под-задачи семейства в порядке выполнения
const SUB_TASKS: [&str; 2] = ["update", "add"];

/// Сверка сторонних листингов аккаунта: позиции, которые существуют
/// на канале, но которые магазин не ведёт сам.
pub struct UnmanagedListingsSynchronization {
    account_id: Uuid,
}

impl UnmanagedListingsSynchronization {
    pub fn new(account_id: Uuid) -> Self {
        Self { account_id }
    }

    /// Семейство задач синхронизации
    pub fn task_type(&self) -> SyncTaskType {
        SyncTaskType::UnmanagedListings
    }

    /// Все под-задачи семейства живут в пространстве "unmanaged_listings/"
    fn task_path(sub_task: &str) -> String {
        format!("unmanaged_listings/{}", sub_task)
    }

    /// Запустить сверку. Занятая блокировка — молчаливый выход,
    /// снятие блокировки гарантировано на любом пути.
    pub async fn run(&self) -> anyhow::Result<()> {
        let account = a002_account::repository::get_by_id(self.account_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Account {} not found", self.account_id))?;

        let lock = LockItemManager::new(format!(
            "{}_unmanaged_listings_synchronization",
            account.component.code()
        ));

        if lock.is_exist().await? {
            tracing::info!(
                "Unmanaged listings sync for '{}' is already running, skipping",
                account.base.description
            );
            return Ok(());
        }

        if !lock.create().await? {
            tracing::info!("Lost the race for '{}' sync lock, skipping", lock.nick());
            return Ok(());
        }

        let mut progress = LockItemProgress::new(
            lock.nick(),
            format!("{} Unmanaged Listings", account.base.description),
        );

        let result = self.process(&account, &mut progress).await;

        if let Err(e) = lock.remove().await {
            tracing::error!("Failed to release lock '{}': {}", lock.nick(), e);
        }

        result
    }

    async fn process(
        &self,
        account: &Account,
        progress: &mut LockItemProgress,
    ) -> anyhow::Result<()> {
        let entries = match self.load_snapshot(account).await? {
            Some(entries) => entries,
            None => {
                tracing::info!(
                    "No channel listings snapshot for account '{}', nothing to reconcile",
                    account.base.description
                );
                progress.set_percentage(100).await;
                return Ok(());
            }
        };

        tracing::info!(
            "Reconciling {} channel listings for account '{}'",
            entries.len(),
            account.base.description
        );

        for (index, sub_task) in SUB_TASKS.iter().enumerate() {
            let path = Self::task_path(sub_task);
            progress.set_details(path.clone()).await;
            progress
                .set_percentage((index * 100 / SUB_TASKS.len()) as u8)
                .await;

            self.run_task(&path, account, &entries).await?;
        }

        progress.set_percentage(100).await;
        Ok(())
    }

    /// Маршрутизация под-задачи по её пути
    async fn run_task(
        &self,
        task_path: &str,
        account: &Account,
        entries: &[ChannelListingEntry],
    ) -> anyhow::Result<()> {
        match task_path {
            "unmanaged_listings/update" => self.update_known(account, entries).await,
            "unmanaged_listings/add" => self.add_unknown(account, entries).await,
            other => anyhow::bail!("Unknown sub-task path: {}", other),
        }
    }

    /// Последний снимок листингов аккаунта из сырого хранилища
    async fn load_snapshot(
        &self,
        account: &Account,
    ) -> anyhow::Result<Option<Vec<ChannelListingEntry>>> {
        let document = raw_storage::get_latest(
            account.component.code(),
            SNAPSHOT_DOCUMENT_TYPE,
            &account.to_string_id(),
        )
        .await?;

        match document {
            Some(doc) => Ok(Some(serde_json::from_str(&doc.raw_json)?)),
            None => Ok(None),
        }
    }

    /// Обновить уже известные сторонние листинги данными снимка
    async fn update_known(
        &self,
        account: &Account,
        entries: &[ChannelListingEntry],
    ) -> anyhow::Result<()> {
        let account_ref = account.to_string_id();
        let mut updated = 0;

        for entry in entries {
            let existing =
                a005_unmanaged_listing::repository::get_by_account_and_sku(&account_ref, &entry.sku)
                    .await?;
            if let Some(mut listing) = existing {
                a005_unmanaged_listing::service::update_from_channel(&mut listing, entry).await?;
                updated += 1;
            }
        }

        tracing::info!("Unmanaged listings update: {} rows refreshed", updated);
        Ok(())
    }

    /// Завести записи для позиций канала, которых магазин не знает.
    /// SKU, уже закреплённые за товарами листингов, не считаются сторонними.
    async fn add_unknown(
        &self,
        account: &Account,
        entries: &[ChannelListingEntry],
    ) -> anyhow::Result<()> {
        let account_ref = account.to_string_id();
        let mut added = 0;
        let mut skipped_managed = 0;

        for entry in entries {
            let existing =
                a005_unmanaged_listing::repository::get_by_account_and_sku(&account_ref, &entry.sku)
                    .await?;
            if existing.is_some() {
                continue;
            }

            let managed =
                a004_listing_product::repository::get_by_online_sku(&account_ref, &entry.sku)
                    .await?;
            if managed.is_some() {
                skipped_managed += 1;
                continue;
            }

            a005_unmanaged_listing::service::create_from_channel(
                &account_ref,
                &account.marketplace_ref,
                entry,
            )
            .await?;
            added += 1;
        }

        tracing::info!(
            "Unmanaged listings add: {} rows created, {} skipped as managed",
            added,
            skipped_managed
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::listing_status::ListingStatus;
    use contracts::enums::marketplace_component::MarketplaceComponent;

    use crate::shared::data::db;
    use crate::system::locks::repository as locks;

    async fn init_test_db() {
        let path = std::env::temp_dir().join(format!("backend-test-{}.db", std::process::id()));
        db::initialize_database(Some(path.to_str().unwrap()))
            .await
            .unwrap();
    }

    async fn seed_account(component: MarketplaceComponent) -> Account {
        let account = Account::new_for_insert(
            format!("ACC-{}", component.code()),
            format!("{} Seller", component.display_name()),
            component,
            "marketplace-1".into(),
        );
        a002_account::repository::insert(&account).await.unwrap();
        account
    }

    async fn store_snapshot(account: &Account, raw: &str) {
        raw_storage::save_raw_json(
            account.component.code(),
            SNAPSHOT_DOCUMENT_TYPE,
            &account.to_string_id(),
            raw,
            chrono::Utc::now(),
        )
        .await
        .unwrap();
    }

    #[test]
    fn test_task_family_and_sub_task_paths() {
        let sync = UnmanagedListingsSynchronization::new(Uuid::new_v4());
        assert_eq!(sync.task_type(), SyncTaskType::UnmanagedListings);
        assert_eq!(
            UnmanagedListingsSynchronization::task_path("update"),
            "unmanaged_listings/update"
        );
    }

    #[tokio::test]
    async fn test_snapshot_reconciliation_adds_and_updates() {
        init_test_db().await;
        let account = seed_account(MarketplaceComponent::Amazon).await;
        let account_ref = account.to_string_id();

        store_snapshot(
            &account,
            r#"[
                {"sku": "UNK-1", "title": "Unknown one", "price": 10.0, "qty": 2, "status": "ACTIVE"},
                {"sku": "UNK-2", "status": "RETIRED"}
            ]"#,
        )
        .await;

        let sync = UnmanagedListingsSynchronization::new(account.base.id.value());
        sync.run().await.unwrap();

        let rows = a005_unmanaged_listing::repository::list_by_account_ref(&account_ref)
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);

        // второй прогон со свежим снимком обновляет, а не дублирует
        store_snapshot(
            &account,
            r#"[{"sku": "UNK-1", "title": "Unknown one", "price": 12.5, "qty": 1, "status": "ACTIVE"}]"#,
        )
        .await;
        sync.run().await.unwrap();

        let rows = a005_unmanaged_listing::repository::list_by_account_ref(&account_ref)
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        let unk1 = rows.iter().find(|r| r.sku == "UNK-1").unwrap();
        assert_eq!(unk1.online_price, Some(12.5));
        assert_eq!(unk1.online_qty, Some(1));
        assert_eq!(unk1.status, ListingStatus::Listed);
    }

    #[tokio::test]
    async fn test_managed_sku_is_not_treated_as_unmanaged() {
        init_test_db().await;
        let account = seed_account(MarketplaceComponent::Ebay).await;
        let account_ref = account.to_string_id();

        // товар уже ведётся магазином под этим SKU
        let mut managed = contracts::domain::a004_listing_product::aggregate::ListingProduct::new_for_insert(
            "LP-M".into(),
            "Managed".into(),
            "l".into(),
            account_ref.clone(),
            "marketplace-1".into(),
            7,
            contracts::domain::a004_listing_product::aggregate::VariationRole::Individual,
            None,
        );
        managed.assign_channel_identity(Some("MANAGED-1".into()), None);
        a004_listing_product::repository::insert(&managed).await.unwrap();

        store_snapshot(
            &account,
            r#"[{"sku": "MANAGED-1", "status": "ACTIVE"}, {"sku": "FREE-1", "status": "ACTIVE"}]"#,
        )
        .await;

        let sync = UnmanagedListingsSynchronization::new(account.base.id.value());
        sync.run().await.unwrap();

        let rows = a005_unmanaged_listing::repository::list_by_account_ref(&account_ref)
            .await
            .unwrap();
        let skus: Vec<&str> = rows.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(skus, vec!["FREE-1"]);
    }

    #[tokio::test]
    async fn test_run_is_noop_when_lock_is_held() {
        init_test_db().await;
        let account = seed_account(MarketplaceComponent::Walmart).await;

        let nick = format!(
            "{}_unmanaged_listings_synchronization",
            MarketplaceComponent::Walmart.code()
        );
        locks::remove(&nick).await.unwrap();
        assert!(locks::create(&nick).await.unwrap());

        store_snapshot(&account, r#"[{"sku": "LOCKED-1", "status": "ACTIVE"}]"#).await;

        let sync = UnmanagedListingsSynchronization::new(account.base.id.value());
        sync.run().await.unwrap();

        let rows = a005_unmanaged_listing::repository::list_by_account_ref(&account.to_string_id())
            .await
            .unwrap();
        assert!(rows.is_empty());

        locks::remove(&nick).await.unwrap();
    }
}
