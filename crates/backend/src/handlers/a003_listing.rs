use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a003_listing::aggregate::Listing;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a002_account;
use crate::domain::a003_listing;

#[derive(Debug, Deserialize)]
pub struct CreateListingRequest {
    #[serde(rename = "accountId")]
    pub account_id: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Создать листинг под аккаунтом
pub async fn create(
    Json(request): Json<CreateListingRequest>,
) -> Result<Json<CreatedResponse>, (StatusCode, String)> {
    let account_id = Uuid::parse_str(&request.account_id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid account id".to_string()))?;

    let account = a002_account::repository::get_by_id(account_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Account not found".to_string()))?;

    let mut listing = Listing::new_for_insert(
        format!("LST-{}", &Uuid::new_v4().to_string()[..8]),
        request.title,
        account.to_string_id(),
        account.marketplace_ref.clone(),
    );

    listing
        .validate()
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e))?;
    listing.before_write();

    let id = a003_listing::repository::insert(&listing)
        .await
        .map_err(internal)?;

    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// Листинги аккаунта
pub async fn list_by_account(
    Path(account_id): Path<String>,
) -> Result<Json<Vec<Listing>>, (StatusCode, String)> {
    let items = a003_listing::repository::list_by_account_ref(&account_id)
        .await
        .map_err(internal)?;
    Ok(Json(items))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    tracing::error!("Listing request failed: {:?}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
}
