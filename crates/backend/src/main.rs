#![allow(clippy::too_many_arguments, clippy::type_complexity)]

pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use std::sync::Arc;

use axum::http::{header, Method};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use system::tasks::managers::u502_sync_marketplace::U502SyncMarketplaceManager;
use system::tasks::managers::u503_sync_unmanaged_listings::U503SyncUnmanagedListingsManager;
use system::tasks::registry::TaskManagerRegistry;
use system::tasks::worker::ScheduledTaskWorker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;
    shared::data::db::initialize_database(db_path.to_str())
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    system::initialization::ensure_marketplaces_seeded().await?;
    shared::logger::log("startup", "Сервер запущен");

    // Периодические задачи синхронизации
    let mut registry = TaskManagerRegistry::new();
    registry.register(U502SyncMarketplaceManager);
    registry.register(U503SyncUnmanagedListingsManager);

    let mut worker = ScheduledTaskWorker::new(
        Arc::new(registry),
        config.sync.worker_interval_seconds,
    );
    worker.add_schedule("u502_sync_marketplace", &config.sync.marketplace_schedule)?;
    worker.add_schedule(
        "u503_sync_unmanaged_listings",
        &config.sync.unmanaged_listings_schedule,
    )?;
    tokio::spawn(worker.run_loop());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes().layer(cors);

    let addr = config.server.bind.clone();
    tracing::info!("Listening on http://{}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
