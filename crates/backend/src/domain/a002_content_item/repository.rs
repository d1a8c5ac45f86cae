use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use contracts::domain::a002_content_item::aggregate::{
    ContentItem, ContentOrderBy, ContentQuery, SortDirection, PUBLISHED_AT_FORMAT,
};
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement};

use crate::shared::data::db::get_connection;
use crate::shared::platform::ContentStore;

/// Content rows in `sys_content`, linked to terms via `sys_content_terms`.
pub struct DbContentStore;

/// SELECT for a content query. Filter values are bound as parameters, the
/// ORDER BY comes from a fixed set of columns.
fn build_select_sql(query: &ContentQuery) -> String {
    let order_column = match query.order_by {
        ContentOrderBy::Date => "c.published_at",
    };
    let direction = match query.direction {
        SortDirection::Desc => "DESC",
    };

    format!(
        "SELECT c.id, c.title, c.author_id, c.published_at \
         FROM sys_content c \
         INNER JOIN sys_content_terms ct ON ct.content_id = c.id \
         INNER JOIN sys_terms t ON t.id = ct.term_id \
         WHERE c.status = ? AND t.slug = ? AND t.taxonomy = ? \
         ORDER BY {order_column} {direction}, c.id {direction} \
         LIMIT ?"
    )
}

fn row_to_item(row: &QueryResult) -> anyhow::Result<ContentItem> {
    let published_at: String = row.try_get("", "published_at")?;
    Ok(ContentItem {
        id: row.try_get("", "id")?,
        title: row.try_get("", "title")?,
        author_id: row.try_get("", "author_id")?,
        published_at: NaiveDateTime::parse_from_str(&published_at, PUBLISHED_AT_FORMAT)
            .with_context(|| format!("Invalid published_at '{}'", published_at))?,
    })
}

#[async_trait]
impl ContentStore for DbContentStore {
    async fn query_content(&self, query: &ContentQuery) -> anyhow::Result<Vec<ContentItem>> {
        let conn = get_connection()?;
        let sql = build_select_sql(query);

        let rows = conn
            .query_all(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                &sql,
                [
                    query.status.code().into(),
                    query.category.as_str().into(),
                    query.taxonomy.as_str().into(),
                    i64::from(query.limit).into(),
                ],
            ))
            .await
            .context("Failed to query sys_content")?;

        rows.iter().map(row_to_item).collect()
    }
}
