use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // ACTION RESPONSE PROCESSING (u501)
        // ========================================
        .route(
            "/api/actions/process-response",
            post(handlers::action_response::process),
        )
        .route(
            "/api/actions/fail-detected",
            post(handlers::action_response::fail_detected),
        )
        // ========================================
        // SYNCHRONIZATION (u502 / u503)
        // ========================================
        .route(
            "/api/marketplace/:id/run-sync-now",
            post(handlers::sync::run_marketplace_sync_now),
        )
        .route(
            "/api/account/:id/sync-unmanaged-listings",
            post(handlers::sync::run_unmanaged_listings_sync),
        )
        .route("/api/sync/progress/:nick", get(handlers::sync::progress))
        // ========================================
        // AGGREGATES
        // ========================================
        .route("/api/account", post(handlers::a002_account::create))
        .route(
            "/api/account/:id/listings",
            get(handlers::a003_listing::list_by_account),
        )
        .route(
            "/api/account/:id/unmanaged-listings",
            get(handlers::a005_unmanaged_listing::list_by_account),
        )
        .route("/api/listing", post(handlers::a003_listing::create))
        .route(
            "/api/listing-product",
            post(handlers::a004_listing_product::create),
        )
        .route(
            "/api/listing-product/:id",
            get(handlers::a004_listing_product::get_by_id),
        )
        .route(
            "/api/listing-product/:id/log",
            get(handlers::a004_listing_product::action_log),
        )
        .route(
            "/api/listing-product/:id/channel-url",
            get(handlers::channel_urls::listing_product_channel_url),
        )
        // ========================================
        // RAW CHANNEL DATA
        // ========================================
        .route(
            "/api/account/:id/channel-snapshot",
            post(handlers::snapshots::push_channel_snapshot),
        )
        .route("/api/raw/:ref", get(handlers::snapshots::get_raw_document))
        // ========================================
        // SYSTEM
        // ========================================
        .route("/api/system/log", get(handlers::system_log::list_recent))
}
