use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::usecases::u502_sync_marketplace::progress::SyncProgressState;
use uuid::Uuid;

use crate::system::locks::progress::read_progress;
use crate::usecases::u502_sync_marketplace::executor;
use crate::usecases::u503_sync_unmanaged_listings::UnmanagedListingsSynchronization;

/// Запустить синхронизацию площадки немедленно.
/// Занятая блокировка — тоже "ok": другой экземпляр уже работает.
pub async fn run_marketplace_sync_now(
    Path(marketplace_id): Path<String>,
) -> Result<&'static str, (StatusCode, String)> {
    let id = parse_id(&marketplace_id)?;
    executor::run_sync_now(id).await.map_err(internal)?;
    Ok("ok")
}

/// Запустить сверку сторонних листингов аккаунта
pub async fn run_unmanaged_listings_sync(
    Path(account_id): Path<String>,
) -> Result<&'static str, (StatusCode, String)> {
    let id = parse_id(&account_id)?;
    UnmanagedListingsSynchronization::new(id)
        .run()
        .await
        .map_err(internal)?;
    Ok("ok")
}

/// Текущий прогресс задачи по nick её блокировки.
/// None — задача не выполняется (или прогресс ещё не записан).
pub async fn progress(
    Path(nick): Path<String>,
) -> Result<Json<Option<SyncProgressState>>, (StatusCode, String)> {
    let state = read_progress(&nick).await.map_err(internal)?;
    Ok(Json(state))
}

fn parse_id(raw: &str) -> Result<Uuid, (StatusCode, String)> {
    Uuid::parse_str(raw).map_err(|_| (StatusCode::BAD_REQUEST, format!("Invalid id: {}", raw)))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    tracing::error!("Sync request failed: {:?}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
}
