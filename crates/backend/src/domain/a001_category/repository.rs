use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;
use crate::shared::platform::{TaxonomyStore, Term};

/// Taxonomy terms stored in `sys_terms`.
pub struct DbTaxonomyStore;

#[async_trait]
impl TaxonomyStore for DbTaxonomyStore {
    async fn lookup_term_by_slug(
        &self,
        slug: &str,
        taxonomy: &str,
    ) -> anyhow::Result<Option<Term>> {
        let conn = get_connection()?;

        let result = conn
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sys_terms WHERE slug = ? AND taxonomy = ?",
                [slug.into(), taxonomy.into()],
            ))
            .await
            .context("Failed to query sys_terms")?;

        match result {
            Some(row) => Ok(Some(Term {
                name: row.try_get("", "name")?,
            })),
            None => Ok(None),
        }
    }
}
