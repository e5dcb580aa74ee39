use chrono::Utc;
use contracts::domain::a004_listing_product::aggregate::{
    ListingProduct, ListingProductId, VariationRole,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::listing_status::ListingStatus;
use contracts::enums::status_changer::StatusChanger;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_listing_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub listing_ref: String,
    pub account_ref: String,
    pub marketplace_ref: String,
    pub store_product_id: i64,
    pub status: i32,
    pub status_changer: i32,
    pub online_sku: Option<String>,
    pub channel_item_id: Option<String>,
    pub online_price: Option<f64>,
    pub online_qty: Option<i32>,
    pub variation_role: String,
    pub parent_product_ref: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ListingProduct {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        ListingProduct {
            base: BaseAggregate::with_metadata(
                ListingProductId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            listing_ref: m.listing_ref,
            account_ref: m.account_ref,
            marketplace_ref: m.marketplace_ref,
            store_product_id: m.store_product_id,
            status: ListingStatus::from_code(m.status).unwrap_or(ListingStatus::NotListed),
            status_changer: StatusChanger::from_code(m.status_changer),
            online_sku: m.online_sku,
            channel_item_id: m.channel_item_id,
            online_price: m.online_price,
            online_qty: m.online_qty,
            variation_role: VariationRole::from_str_code(&m.variation_role),
            parent_product_ref: m.parent_product_ref,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &ListingProduct) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        listing_ref: Set(aggregate.listing_ref.clone()),
        account_ref: Set(aggregate.account_ref.clone()),
        marketplace_ref: Set(aggregate.marketplace_ref.clone()),
        store_product_id: Set(aggregate.store_product_id),
        status: Set(aggregate.status.code()),
        status_changer: Set(aggregate.status_changer.code()),
        online_sku: Set(aggregate.online_sku.clone()),
        channel_item_id: Set(aggregate.channel_item_id.clone()),
        online_price: Set(aggregate.online_price),
        online_qty: Set(aggregate.online_qty),
        variation_role: Set(aggregate.variation_role.as_str().to_string()),
        parent_product_ref: Set(aggregate.parent_product_ref.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<ListingProduct>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &ListingProduct) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &ListingProduct) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

/// Потомки вариативной связки данного родителя
pub async fn list_by_parent_ref(parent_ref: &str) -> anyhow::Result<Vec<ListingProduct>> {
    let items: Vec<ListingProduct> = Entity::find()
        .filter(Column::ParentProductRef.eq(parent_ref))
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_by_marketplace_ref(
    marketplace_ref: &str,
) -> anyhow::Result<Vec<ListingProduct>> {
    let items: Vec<ListingProduct> = Entity::find()
        .filter(Column::MarketplaceRef.eq(marketplace_ref))
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Товар аккаунта по SKU, присвоенному каналом
pub async fn get_by_online_sku(
    account_ref: &str,
    sku: &str,
) -> anyhow::Result<Option<ListingProduct>> {
    let result = Entity::find()
        .filter(Column::AccountRef.eq(account_ref))
        .filter(Column::OnlineSku.eq(sku))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

/// Счётчики товаров площадки: (всего, активных)
pub async fn count_by_marketplace_ref(marketplace_ref: &str) -> anyhow::Result<(i32, i32)> {
    let total = Entity::find()
        .filter(Column::MarketplaceRef.eq(marketplace_ref))
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?;
    let active = Entity::find()
        .filter(Column::MarketplaceRef.eq(marketplace_ref))
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::Status.eq(ListingStatus::Listed.code()))
        .count(conn())
        .await?;
    Ok((total as i32, active as i32))
}
