use axum::http::StatusCode;
use axum::Json;
use contracts::shared::logger::LogEntry;

use crate::shared::logger::repository;

/// Последние записи системного журнала
pub async fn list_recent() -> Result<Json<Vec<LogEntry>>, (StatusCode, String)> {
    let entries = repository::list_recent(200).await.map_err(|e| {
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
    })?;
    Ok(Json(entries))
}
