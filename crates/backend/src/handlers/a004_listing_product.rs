use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a004_listing_product::aggregate::{ListingProduct, VariationRole};
use contracts::domain::a006_listing_log::entry::ListingLogEntry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a003_listing;
use crate::domain::a004_listing_product;
use crate::domain::a006_listing_log;

#[derive(Debug, Deserialize)]
pub struct CreateListingProductRequest {
    #[serde(rename = "listingId")]
    pub listing_id: String,
    #[serde(rename = "storeProductId")]
    pub store_product_id: i64,
    pub description: String,
    #[serde(rename = "variationRole", default)]
    pub variation_role: Option<VariationRole>,
    #[serde(rename = "parentProductRef", default)]
    pub parent_product_ref: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Добавить товар магазина в листинг
pub async fn create(
    Json(request): Json<CreateListingProductRequest>,
) -> Result<Json<CreatedResponse>, (StatusCode, String)> {
    let listing_id = Uuid::parse_str(&request.listing_id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid listing id".to_string()))?;

    let listing = a003_listing::repository::get_by_id(listing_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Listing not found".to_string()))?;

    let product = ListingProduct::new_for_insert(
        format!("LP-{}", &Uuid::new_v4().to_string()[..8]),
        request.description,
        listing.to_string_id(),
        listing.account_ref.clone(),
        listing.marketplace_ref.clone(),
        request.store_product_id,
        request.variation_role.unwrap_or(VariationRole::Individual),
        request.parent_product_ref,
    );

    let id = a004_listing_product::service::create(product)
        .await
        .map_err(unprocessable)?;

    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// Товар листинга по ID
pub async fn get_by_id(
    Path(product_id): Path<String>,
) -> Result<Json<ListingProduct>, (StatusCode, String)> {
    let id = Uuid::parse_str(&product_id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid id".to_string()))?;

    let product = a004_listing_product::service::get_by_id(id)
        .await
        .map_err(internal)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Listing product not found".to_string()))?;

    Ok(Json(product))
}

/// Журнал действий над товаром листинга
pub async fn action_log(
    Path(product_id): Path<String>,
) -> Result<Json<Vec<ListingLogEntry>>, (StatusCode, String)> {
    let entries = a006_listing_log::repository::list_by_listing_product(&product_id)
        .await
        .map_err(internal)?;
    Ok(Json(entries))
}

fn unprocessable(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::UNPROCESSABLE_ENTITY, format!("{:#}", e))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    tracing::error!("Listing product request failed: {:?}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
}
