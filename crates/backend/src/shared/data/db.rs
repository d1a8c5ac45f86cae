use anyhow::Context;
use once_cell::sync::OnceCell;
use sea_orm::{Database, DatabaseConnection};
use sqlx::sqlite::SqlitePool;
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables read through the platform stores: terms, content, the link
/// between them and the authors.
const SCHEMA: &[(&str, &str)] = &[
    (
        "sys_terms",
        r#"
        CREATE TABLE sys_terms (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            taxonomy TEXT NOT NULL DEFAULT 'category',
            slug TEXT NOT NULL,
            name TEXT NOT NULL,
            UNIQUE (taxonomy, slug)
        );
        "#,
    ),
    (
        "sys_users",
        r#"
        CREATE TABLE sys_users (
            id TEXT PRIMARY KEY NOT NULL,
            display_name TEXT NOT NULL DEFAULT ''
        );
        "#,
    ),
    (
        "sys_content",
        r#"
        CREATE TABLE sys_content (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author_id TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'draft',
            published_at TEXT NOT NULL
        );
        "#,
    ),
    (
        "sys_content_terms",
        r#"
        CREATE TABLE sys_content_terms (
            content_id INTEGER NOT NULL,
            term_id INTEGER NOT NULL,
            PRIMARY KEY (content_id, term_id)
        );
        "#,
    ),
];

fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

async fn has_table(pool: &SqlitePool, table_name: &str) -> anyhow::Result<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(1) FROM sqlite_master WHERE type='table' AND name = ?1",
    )
    .bind(table_name)
    .fetch_one(pool)
    .await?;
    Ok(count > 0)
}

async fn ensure_schema(db_url: &str) -> anyhow::Result<()> {
    let pool = SqlitePool::connect(db_url)
        .await
        .context("Failed to open database for schema bootstrap")?;

    for (table_name, ddl) in SCHEMA {
        if has_table(&pool, table_name).await? {
            continue;
        }
        tracing::info!("Creating {} table", table_name);
        sqlx::query(ddl)
            .execute(&pool)
            .await
            .with_context(|| format!("Failed to create table {}", table_name))?;
    }

    pool.close().await;
    Ok(())
}

pub async fn initialize_database(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_path.is_absolute() {
        db_path.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_path)
    };
    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Opening database {}", absolute_path.display());

    ensure_schema(&db_url).await?;

    let conn = Database::connect(&db_url).await?;
    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DB_CONN
        .get()
        .context("Database connection has not been initialized")
}
