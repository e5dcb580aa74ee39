use anyhow::Result;
use async_trait::async_trait;

use crate::domain::a002_account;
use crate::system::tasks::manager::TaskManager;
use crate::usecases::u503_sync_unmanaged_listings::executor::UnmanagedListingsSynchronization;

/// Менеджер периодической сверки сторонних листингов (u503)
pub struct U503SyncUnmanagedListingsManager;

#[async_trait]
impl TaskManager for U503SyncUnmanagedListingsManager {
    fn task_type(&self) -> &'static str {
        "u503_sync_unmanaged_listings"
    }

    async fn run(&self) -> Result<()> {
        let accounts = a002_account::repository::list_enabled().await?;

        for account in accounts {
            let sync = UnmanagedListingsSynchronization::new(account.base.id.value());
            if let Err(e) = sync.run().await {
                tracing::error!(
                    "Unmanaged listings sync failed for account '{}': {:?}",
                    account.base.description,
                    e
                );
            }
        }

        Ok(())
    }
}
