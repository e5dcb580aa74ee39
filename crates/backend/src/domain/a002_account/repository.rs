use chrono::Utc;
use contracts::domain::a002_account::aggregate::{Account, AccountId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::marketplace_component::MarketplaceComponent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub component: String,
    pub marketplace_ref: String,
    pub is_enabled: bool,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Account {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Account {
            base: BaseAggregate::with_metadata(
                AccountId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            component: MarketplaceComponent::from_code(&m.component)
                .unwrap_or(MarketplaceComponent::Walmart),
            marketplace_ref: m.marketplace_ref,
            is_enabled: m.is_enabled,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_enabled() -> anyhow::Result<Vec<Account>> {
    let items: Vec<Account> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::IsEnabled.eq(true))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Account>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Account) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        component: Set(aggregate.component.code().to_string()),
        marketplace_ref: Set(aggregate.marketplace_ref.clone()),
        is_enabled: Set(aggregate.is_enabled),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

