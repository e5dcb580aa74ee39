use anyhow::Result;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::db::get_connection;

/// Модель для хранения сырых JSON-документов канала
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document_raw_storage")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub marketplace: String,
    pub document_type: String,
    pub document_no: String,
    pub raw_json: String,
    pub fetched_at: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Сохранить сырой JSON-документ канала.
/// Возвращает уникальный ref (id записи) для использования в source_ref
pub async fn save_raw_json(
    marketplace: &str,
    document_type: &str,
    document_no: &str,
    raw_json: &str,
    fetched_at: chrono::DateTime<Utc>,
) -> Result<String> {
    let id = Uuid::new_v4().to_string();

    let active = ActiveModel {
        id: Set(id.clone()),
        marketplace: Set(marketplace.to_string()),
        document_type: Set(document_type.to_string()),
        document_no: Set(document_no.to_string()),
        raw_json: Set(raw_json.to_string()),
        fetched_at: Set(fetched_at.to_rfc3339()),
        created_at: Set(Utc::now().to_rfc3339()),
    };
    active.insert(conn()).await?;

    Ok(id)
}

/// Получить документ по ref
pub async fn get_by_ref(id: &str) -> Result<Option<Model>> {
    Ok(Entity::find_by_id(id.to_string()).one(conn()).await?)
}

/// Последний сохранённый документ данного типа для данного номера
/// (например, последний снимок листингов аккаунта)
pub async fn get_latest(
    marketplace: &str,
    document_type: &str,
    document_no: &str,
) -> Result<Option<Model>> {
    let result = Entity::find()
        .filter(Column::Marketplace.eq(marketplace))
        .filter(Column::DocumentType.eq(document_type))
        .filter(Column::DocumentNo.eq(document_no))
        .order_by_desc(Column::CreatedAt)
        .one(conn())
        .await?;
    Ok(result)
}
