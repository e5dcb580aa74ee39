use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::a001_marketplace;
use crate::domain::a004_listing_product;
use crate::shared::marketplaces;

#[derive(Debug, Serialize)]
pub struct ChannelUrlResponse {
    pub url: String,
}

/// Публичная ссылка на позицию товара листинга на сайте канала
pub async fn listing_product_channel_url(
    Path(product_id): Path<String>,
) -> Result<Json<ChannelUrlResponse>, (StatusCode, String)> {
    let id = Uuid::parse_str(&product_id)
        .map_err(|_| (StatusCode::BAD_REQUEST, format!("Invalid id: {}", product_id)))?;

    let product = a004_listing_product::repository::get_by_id(id)
        .await
        .map_err(internal)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Listing product not found".to_string()))?;

    let item_id = product
        .channel_item_id
        .clone()
        .or_else(|| product.online_sku.clone())
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                "Product has no channel identity yet".to_string(),
            )
        })?;

    let marketplace_id = Uuid::parse_str(&product.marketplace_ref)
        .map_err(|_| internal(anyhow::anyhow!("Broken marketplace reference")))?;
    let marketplace = a001_marketplace::repository::get_by_id(marketplace_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Marketplace not found".to_string()))?;

    let url = marketplaces::channel_item_url(marketplace.component, &marketplace.url, &item_id);
    Ok(Json(ChannelUrlResponse { url }))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    tracing::error!("Channel url lookup failed: {:?}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
}
