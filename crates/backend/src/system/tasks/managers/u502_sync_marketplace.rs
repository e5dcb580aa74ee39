use anyhow::Result;
use async_trait::async_trait;

use crate::domain::a001_marketplace;
use crate::system::tasks::manager::TaskManager;
use crate::usecases::u502_sync_marketplace::executor;

/// Менеджер периодической синхронизации площадок (u502)
pub struct U502SyncMarketplaceManager;

#[async_trait]
impl TaskManager for U502SyncMarketplaceManager {
    fn task_type(&self) -> &'static str {
        "u502_sync_marketplace"
    }

    async fn run(&self) -> Result<()> {
        let marketplaces = a001_marketplace::repository::list_enabled().await?;

        for marketplace in marketplaces {
            let id = marketplace.base.id.value();
            if let Err(e) = executor::run_sync_now(id).await {
                tracing::error!(
                    "Marketplace sync failed for '{}': {:?}",
                    marketplace.base.description,
                    e
                );
            }
        }

        Ok(())
    }
}
