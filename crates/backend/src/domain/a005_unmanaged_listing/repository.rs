use chrono::Utc;
use contracts::domain::a005_unmanaged_listing::aggregate::{UnmanagedListing, UnmanagedListingId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::listing_status::ListingStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a005_unmanaged_listing")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub account_ref: String,
    pub marketplace_ref: String,
    pub sku: String,
    pub channel_item_id: Option<String>,
    pub online_price: Option<f64>,
    pub online_qty: Option<i32>,
    pub status: i32,
    pub linked_product_ref: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for UnmanagedListing {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        UnmanagedListing {
            base: BaseAggregate::with_metadata(
                UnmanagedListingId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            account_ref: m.account_ref,
            marketplace_ref: m.marketplace_ref,
            sku: m.sku,
            channel_item_id: m.channel_item_id,
            online_price: m.online_price,
            online_qty: m.online_qty,
            status: ListingStatus::from_code(m.status).unwrap_or(ListingStatus::NotListed),
            linked_product_ref: m.linked_product_ref,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &UnmanagedListing) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        account_ref: Set(aggregate.account_ref.clone()),
        marketplace_ref: Set(aggregate.marketplace_ref.clone()),
        sku: Set(aggregate.sku.clone()),
        channel_item_id: Set(aggregate.channel_item_id.clone()),
        online_price: Set(aggregate.online_price),
        online_qty: Set(aggregate.online_qty),
        status: Set(aggregate.status.code()),
        linked_product_ref: Set(aggregate.linked_product_ref.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn get_by_account_and_sku(
    account_ref: &str,
    sku: &str,
) -> anyhow::Result<Option<UnmanagedListing>> {
    let result = Entity::find()
        .filter(Column::AccountRef.eq(account_ref))
        .filter(Column::Sku.eq(sku))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn list_by_account_ref(account_ref: &str) -> anyhow::Result<Vec<UnmanagedListing>> {
    let items: Vec<UnmanagedListing> = Entity::find()
        .filter(Column::AccountRef.eq(account_ref))
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert(aggregate: &UnmanagedListing) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &UnmanagedListing) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}
