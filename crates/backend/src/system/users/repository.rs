use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;
use crate::shared::platform::UserDirectory;

/// Get display name by user ID
pub async fn get_display_name(id: &str) -> anyhow::Result<Option<String>> {
    let conn = get_connection()?;

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT display_name FROM sys_users WHERE id = ?",
            [id.into()],
        ))
        .await
        .context("Failed to query sys_users")?;

    match result {
        Some(row) => Ok(Some(row.try_get("", "display_name")?)),
        None => Ok(None),
    }
}

/// Authors of content items, resolved from `sys_users`.
pub struct DbUserDirectory;

#[async_trait]
impl UserDirectory for DbUserDirectory {
    async fn resolve_author_display_name(&self, author_id: &str) -> anyhow::Result<String> {
        Ok(get_display_name(author_id).await?.unwrap_or_default())
    }
}
