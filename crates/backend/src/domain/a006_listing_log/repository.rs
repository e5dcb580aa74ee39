use chrono::Utc;
use contracts::domain::a006_listing_log::entry::ListingLogEntry;
use contracts::enums::initiator::Initiator;
use contracts::enums::log_priority::LogPriority;
use contracts::enums::message_kind::MessageKind;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a006_listing_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub listing_product_ref: String,
    pub action_id: i64,
    pub action: String,
    pub initiator: i32,
    pub priority: i32,
    pub message: String,
    pub message_kind: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ListingLogEntry {
    fn from(m: Model) -> Self {
        ListingLogEntry {
            id: m.id,
            listing_product_ref: m.listing_product_ref,
            action_id: m.action_id,
            action: m.action,
            initiator: match m.initiator {
                0 => Initiator::Unknown,
                1 => Initiator::User,
                _ => Initiator::Extension,
            },
            priority: LogPriority::from_code(m.priority),
            message: m.message,
            message_kind: MessageKind::from_channel_code(&m.message_kind),
            created_at: chrono::DateTime::parse_from_rfc3339(&m.created_at)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Записать одну строку журнала действий
pub async fn insert_entry(
    listing_product_ref: &str,
    action_id: i64,
    action: &str,
    initiator: Initiator,
    priority: LogPriority,
    message: &str,
    message_kind: MessageKind,
) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        listing_product_ref: Set(listing_product_ref.to_string()),
        action_id: Set(action_id),
        action: Set(action.to_string()),
        initiator: Set(initiator.code()),
        priority: Set(priority.code()),
        message: Set(message.to_string()),
        message_kind: Set(message_kind.as_str().to_string()),
        created_at: Set(Utc::now().to_rfc3339()),
    };
    let inserted = active.insert(conn()).await?;
    Ok(inserted.id)
}

/// Записи журнала по товару листинга в порядке записи
pub async fn list_by_listing_product(
    listing_product_ref: &str,
) -> anyhow::Result<Vec<ListingLogEntry>> {
    let items = Entity::find()
        .filter(Column::ListingProductRef.eq(listing_product_ref))
        .order_by_asc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Записи журнала одного действия в порядке записи
pub async fn list_by_action_id(action_id: i64) -> anyhow::Result<Vec<ListingLogEntry>> {
    let items = Entity::find()
        .filter(Column::ActionId.eq(action_id))
        .order_by_asc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}
