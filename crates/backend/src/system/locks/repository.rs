use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

/// Именованная блокировка задачи синхронизации.
///
/// nick — первичный ключ, поэтому «создать, если не существует»
/// атомарен на уровне БД: два процесса не могут пройти его одновременно.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sys_lock_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub nick: String,
    pub data: Option<String>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Существует ли блокировка с данным nick
pub async fn exists(nick: &str) -> anyhow::Result<bool> {
    let found = Entity::find_by_id(nick.to_string()).one(conn()).await?;
    Ok(found.is_some())
}

/// Атомарно создать блокировку.
///
/// Возвращает true, если блокировка создана этим вызовом, и false,
/// если nick уже занят (проигранная гонка — не ошибка).
pub async fn create(nick: &str) -> anyhow::Result<bool> {
    let active = ActiveModel {
        nick: Set(nick.to_string()),
        data: Set(None),
        created_at: Set(Utc::now().to_rfc3339()),
    };

    let result = Entity::insert(active)
        .on_conflict(OnConflict::column(Column::Nick).do_nothing().to_owned())
        .exec(conn())
        .await;

    match result {
        Ok(_) => Ok(true),
        Err(DbErr::RecordNotInserted) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Снять блокировку. Идемпотентно: отсутствие записи — не ошибка
pub async fn remove(nick: &str) -> anyhow::Result<()> {
    Entity::delete_many()
        .filter(Column::Nick.eq(nick))
        .exec(conn())
        .await?;
    Ok(())
}

/// Записать данные прогресса в запись блокировки
pub async fn set_data(nick: &str, data: &str) -> anyhow::Result<()> {
    Entity::update_many()
        .col_expr(Column::Data, sea_orm::sea_query::Expr::value(data))
        .filter(Column::Nick.eq(nick))
        .exec(conn())
        .await?;
    Ok(())
}

/// Прочитать запись блокировки
pub async fn get(nick: &str) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(nick.to_string()).one(conn()).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;

    async fn init_test_db() {
        let path = std::env::temp_dir().join(format!("backend-test-{}.db", std::process::id()));
        db::initialize_database(Some(path.to_str().unwrap()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_is_atomic_and_single_winner() {
        init_test_db().await;
        let nick = "test_lock_single_winner";
        remove(nick).await.unwrap();

        assert!(!exists(nick).await.unwrap());
        assert!(create(nick).await.unwrap());
        // повторное создание проигрывает, но не падает
        assert!(!create(nick).await.unwrap());
        assert!(exists(nick).await.unwrap());

        remove(nick).await.unwrap();
        assert!(!exists(nick).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        init_test_db().await;
        let nick = "test_lock_idempotent_remove";

        remove(nick).await.unwrap();
        remove(nick).await.unwrap();
        assert!(!exists(nick).await.unwrap());
    }

    #[tokio::test]
    async fn test_set_data_updates_lock_row() {
        init_test_db().await;
        let nick = "test_lock_data";
        remove(nick).await.unwrap();

        assert!(create(nick).await.unwrap());
        set_data(nick, "{\"percentage\": 40}").await.unwrap();
        let row = get(nick).await.unwrap().unwrap();
        assert_eq!(row.data.as_deref(), Some("{\"percentage\": 40}"));

        remove(nick).await.unwrap();
    }
}
