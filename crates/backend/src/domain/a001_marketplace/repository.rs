use chrono::Utc;
use contracts::domain::a001_marketplace::aggregate::{Marketplace, MarketplaceId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::marketplace_component::MarketplaceComponent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_marketplace")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub component: String,
    pub channel_id: String,
    pub url: String,
    pub is_enabled: bool,
    pub last_sync_at: Option<chrono::DateTime<chrono::Utc>>,
    pub products_total: i32,
    pub products_active: i32,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Marketplace {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Marketplace {
            base: BaseAggregate::with_metadata(
                MarketplaceId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            component: MarketplaceComponent::from_code(&m.component)
                .unwrap_or(MarketplaceComponent::Walmart),
            channel_id: m.channel_id,
            url: m.url,
            is_enabled: m.is_enabled,
            last_sync_at: m.last_sync_at,
            products_total: m.products_total,
            products_active: m.products_active,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Marketplace) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        component: Set(aggregate.component.code().to_string()),
        channel_id: Set(aggregate.channel_id.clone()),
        url: Set(aggregate.url.clone()),
        is_enabled: Set(aggregate.is_enabled),
        last_sync_at: Set(aggregate.last_sync_at),
        products_total: Set(aggregate.products_total),
        products_active: Set(aggregate.products_active),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Marketplace>> {
    let items: Vec<Marketplace> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_enabled() -> anyhow::Result<Vec<Marketplace>> {
    let items: Vec<Marketplace> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::IsEnabled.eq(true))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Marketplace>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Marketplace) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Marketplace) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}
