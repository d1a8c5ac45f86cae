use anyhow::Context;
use contracts::domain::a002_content_item::aggregate::ContentStatus;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use super::db::get_connection;

const DEMO_USERS: &[(&str, &str)] = &[
    ("alice", "Alice Walker"),
    ("bob", "Bob Stone"),
    ("carol", "Carol Diaz"),
];

const DEMO_TERMS: &[(&str, &str)] = &[
    ("sports", "Sports"),
    ("animals", "Animals"),
    ("business", "Business"),
    ("entertainment", "Entertainment"),
    ("world-and-news", "World and News"),
];

/// (title, author, status, published_at, category slug)
const DEMO_CONTENT: &[(&str, &str, ContentStatus, &str, &str)] = &[
    ("Cup final goes to extra time", "alice", ContentStatus::Publish, "2024-03-02 18:30:00", "sports"),
    ("Marathon route announced", "bob", ContentStatus::Publish, "2024-02-11 09:00:00", "sports"),
    ("Transfer window rumours", "alice", ContentStatus::Draft, "2024-03-05 12:00:00", "sports"),
    ("Quarterly results beat forecasts", "carol", ContentStatus::Publish, "2024-01-20 08:15:00", "business"),
    ("Local bakery expands", "bob", ContentStatus::Publish, "2024-02-01 10:45:00", "business"),
    ("Festival line-up revealed", "carol", ContentStatus::Publish, "2024-03-01 16:00:00", "entertainment"),
    ("Election night recap", "alice", ContentStatus::Publish, "2024-01-07 23:10:00", "world-and-news"),
];

/// Наполнение пустой базы демонстрационными данными
pub async fn seed_demo_data() -> anyhow::Result<()> {
    let conn = get_connection()?;

    let existing = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS cnt FROM sys_terms".to_string(),
        ))
        .await?
        .map(|row| row.try_get::<i64>("", "cnt"))
        .transpose()?
        .unwrap_or(0);

    if existing > 0 {
        tracing::info!("Taxonomy already populated, skipping demo data");
        return Ok(());
    }

    tracing::info!("Seeding demo data");

    for (id, display_name) in DEMO_USERS {
        conn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT OR IGNORE INTO sys_users (id, display_name) VALUES (?, ?)",
            [(*id).into(), (*display_name).into()],
        ))
        .await
        .context("Failed to insert demo user")?;
    }

    for (slug, name) in DEMO_TERMS {
        conn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_terms (taxonomy, slug, name) VALUES ('category', ?, ?)",
            [(*slug).into(), (*name).into()],
        ))
        .await
        .context("Failed to insert demo term")?;
    }

    for (title, author, status, published_at, slug) in DEMO_CONTENT {
        let result = conn
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                "INSERT INTO sys_content (title, author_id, status, published_at) VALUES (?, ?, ?, ?)",
                [
                    (*title).into(),
                    (*author).into(),
                    status.code().into(),
                    (*published_at).into(),
                ],
            ))
            .await
            .context("Failed to insert demo content")?;

        let content_id = i64::try_from(result.last_insert_id())
            .context("Demo content id does not fit in i64")?;
        conn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_content_terms (content_id, term_id)
             SELECT ?, id FROM sys_terms WHERE taxonomy = 'category' AND slug = ?",
            [content_id.into(), (*slug).into()],
        ))
        .await
        .context("Failed to link demo content to its category")?;
    }

    tracing::info!(
        "Demo data ready: {} terms, {} items",
        DEMO_TERMS.len(),
        DEMO_CONTENT.len()
    );
    Ok(())
}
