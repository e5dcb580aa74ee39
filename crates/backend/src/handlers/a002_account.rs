use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_account::aggregate::Account;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a001_marketplace;
use crate::domain::a002_account;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(rename = "marketplaceId")]
    pub marketplace_id: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Завести аккаунт продавца на площадке
pub async fn create(
    Json(request): Json<CreateAccountRequest>,
) -> Result<Json<CreatedResponse>, (StatusCode, String)> {
    let marketplace_id = Uuid::parse_str(&request.marketplace_id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid marketplace id".to_string()))?;

    let marketplace = a001_marketplace::repository::get_by_id(marketplace_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Marketplace not found".to_string()))?;

    let mut account = Account::new_for_insert(
        format!("ACC-{}", &Uuid::new_v4().to_string()[..8]),
        request.title,
        marketplace.component,
        marketplace.to_string_id(),
    );

    account
        .validate()
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e))?;
    account.before_write();

    let id = a002_account::repository::insert(&account)
        .await
        .map_err(internal)?;

    Ok(Json(CreatedResponse { id: id.to_string() }))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    tracing::error!("Account request failed: {:?}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
}
