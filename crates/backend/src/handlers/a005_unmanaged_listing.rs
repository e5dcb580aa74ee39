use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a005_unmanaged_listing::aggregate::UnmanagedListing;

use crate::domain::a005_unmanaged_listing;

/// Сторонние листинги аккаунта
pub async fn list_by_account(
    Path(account_id): Path<String>,
) -> Result<Json<Vec<UnmanagedListing>>, (StatusCode, String)> {
    let items = a005_unmanaged_listing::repository::list_by_account_ref(&account_id)
        .await
        .map_err(|e| {
            tracing::error!("Unmanaged listings request failed: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
        })?;
    Ok(Json(items))
}
