use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    if DB_CONN.get().is_some() {
        return Ok(());
    }

    let db_file = db_path.unwrap_or("target/db/app.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;

    // Два конкурентных вызова инициализации безопасны: схема
    // создаётся идемпотентно, лишнее соединение просто закрывается
    let _ = DB_CONN.set(conn);
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database is not initialized, call initialize_database() first")
}

/// Minimal schema bootstrap: ensure required tables exist
async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS a001_marketplace (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            component TEXT NOT NULL,
            channel_id TEXT NOT NULL,
            url TEXT NOT NULL DEFAULT '',
            is_enabled INTEGER NOT NULL DEFAULT 1,
            last_sync_at TEXT,
            products_total INTEGER NOT NULL DEFAULT 0,
            products_active INTEGER NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a002_account (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            component TEXT NOT NULL,
            marketplace_ref TEXT NOT NULL,
            is_enabled INTEGER NOT NULL DEFAULT 1,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a003_listing (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            account_ref TEXT NOT NULL,
            marketplace_ref TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a004_listing_product (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            listing_ref TEXT NOT NULL,
            account_ref TEXT NOT NULL,
            marketplace_ref TEXT NOT NULL,
            store_product_id INTEGER NOT NULL,
            status INTEGER NOT NULL DEFAULT 0,
            status_changer INTEGER NOT NULL DEFAULT 0,
            online_sku TEXT,
            channel_item_id TEXT,
            online_price REAL,
            online_qty INTEGER,
            variation_role TEXT NOT NULL DEFAULT 'individual',
            parent_product_ref TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a005_unmanaged_listing (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            account_ref TEXT NOT NULL,
            marketplace_ref TEXT NOT NULL,
            sku TEXT NOT NULL,
            channel_item_id TEXT,
            online_price REAL,
            online_qty INTEGER,
            status INTEGER NOT NULL DEFAULT 0,
            linked_product_ref TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_a005_account_sku
            ON a005_unmanaged_listing (account_ref, sku);
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a006_listing_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            listing_product_ref TEXT NOT NULL,
            action_id INTEGER NOT NULL,
            action TEXT NOT NULL,
            initiator INTEGER NOT NULL,
            priority INTEGER NOT NULL,
            message TEXT NOT NULL,
            message_kind TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
        // nick — первичный ключ: атомарный create-if-not-exists для
        // single-flight задач обеспечивает сама БД
        r#"
        CREATE TABLE IF NOT EXISTS sys_lock_item (
            nick TEXT PRIMARY KEY NOT NULL,
            data TEXT,
            created_at TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS document_raw_storage (
            id TEXT PRIMARY KEY NOT NULL,
            marketplace TEXT NOT NULL,
            document_type TEXT NOT NULL,
            document_no TEXT NOT NULL,
            raw_json TEXT NOT NULL,
            fetched_at TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS system_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            source TEXT NOT NULL,
            category TEXT NOT NULL,
            message TEXT NOT NULL
        );
        "#,
    ];

    for sql in statements {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    tracing::info!("Database schema bootstrap completed");
    Ok(())
}
