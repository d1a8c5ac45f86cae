//! Capabilities the admin extension needs from its host.
//!
//! The taxonomy, content and user stores are owned by the host and only read
//! here. The admin menu and the notice board are the two registration hooks
//! the host exposes during startup.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use contracts::domain::a002_content_item::aggregate::{ContentItem, ContentQuery};

/// Термин таксономии (для категорий важно только имя)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub name: String,
}

#[async_trait]
pub trait TaxonomyStore: Send + Sync {
    /// `Ok(None)` when no term with this slug exists in the taxonomy.
    async fn lookup_term_by_slug(&self, slug: &str, taxonomy: &str)
        -> anyhow::Result<Option<Term>>;
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Items come back already filtered, ordered and limited.
    async fn query_content(&self, query: &ContentQuery) -> anyhow::Result<Vec<ContentItem>>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Unknown authors resolve to an empty string.
    async fn resolve_author_display_name(&self, author_id: &str) -> anyhow::Result<String>;
}

pub type PageFuture = Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send>>;

/// Renders the body of one admin page. Called once per request.
pub type PageHandler = Arc<dyn Fn() -> PageFuture + Send + Sync>;

/// Everything the host needs to put a page into the admin menu.
pub struct AdminPage {
    pub title: String,
    pub menu_title: String,
    pub capability: String,
    pub path_key: String,
    pub handler: PageHandler,
}

pub trait AdminMenu {
    fn register_admin_page(&mut self, page: AdminPage);
}

/// Produces notice markup when the admin shell renders.
pub type NoticeCallback = Box<dyn Fn() -> String + Send + Sync>;

pub trait NoticeBoard {
    fn register_deferred_notice(&mut self, callback: NoticeCallback);
}

/// Stores the request handlers read from.
#[derive(Clone)]
pub struct Platform {
    pub taxonomy: Arc<dyn TaxonomyStore>,
    pub content: Arc<dyn ContentStore>,
    pub users: Arc<dyn UserDirectory>,
}
