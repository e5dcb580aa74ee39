use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::a002_account;
use crate::shared::data::raw_storage;

#[derive(Debug, Serialize)]
pub struct SnapshotStoredResponse {
    /// Ref сохранённого документа в сыром хранилище
    #[serde(rename = "ref")]
    pub document_ref: String,
}

/// Принять снимок листингов аккаунта от транспортного слоя.
///
/// Снимок складывается в сырое хранилище как есть; сверкой занимается
/// задача синхронизации сторонних листингов.
pub async fn push_channel_snapshot(
    Path(account_id): Path<String>,
    Json(snapshot): Json<serde_json::Value>,
) -> Result<Json<SnapshotStoredResponse>, (StatusCode, String)> {
    let id = Uuid::parse_str(&account_id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid account id".to_string()))?;

    let account = a002_account::repository::get_by_id(id)
        .await
        .map_err(internal)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Account not found".to_string()))?;

    if !snapshot.is_array() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "Snapshot must be an array of channel listings".to_string(),
        ));
    }

    let raw_json = snapshot.to_string();
    let document_ref = raw_storage::save_raw_json(
        account.component.code(),
        "channel_listings",
        &account.to_string_id(),
        &raw_json,
        chrono::Utc::now(),
    )
    .await
    .map_err(internal)?;

    Ok(Json(SnapshotStoredResponse { document_ref }))
}

/// Сырой документ по его ref (для разбора инцидентов)
pub async fn get_raw_document(
    Path(document_ref): Path<String>,
) -> Result<Json<raw_storage::Model>, (StatusCode, String)> {
    let document = raw_storage::get_by_ref(&document_ref)
        .await
        .map_err(internal)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Document not found".to_string()))?;
    Ok(Json(document))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    tracing::error!("Snapshot request failed: {:?}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
}
