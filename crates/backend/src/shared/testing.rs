//! In-memory stand-ins for the host stores, shared by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use contracts::domain::a001_category::aggregate::CategoryDefinition;
use contracts::domain::a002_content_item::aggregate::{ContentItem, ContentQuery};

use super::platform::{AdminMenu, AdminPage, ContentStore, TaxonomyStore, Term, UserDirectory};

pub fn definition(slug: &str, name: &str, limit: u32) -> CategoryDefinition {
    CategoryDefinition::new(slug, name, limit).unwrap()
}

/// Item published at midnight of `date` (`YYYY-MM-DD`).
pub fn item(id: i64, title: &str, author_id: &str, date: &str) -> ContentItem {
    ContentItem {
        id,
        title: title.to_string(),
        author_id: author_id.to_string(),
        published_at: NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    }
}

/// Terms of the "category" taxonomy, slug → name.
pub struct FakeTaxonomy {
    terms: HashMap<String, String>,
    lookups: Mutex<Vec<(String, String)>>,
}

impl FakeTaxonomy {
    pub fn new(terms: HashMap<&str, &str>) -> Self {
        Self {
            terms: terms
                .into_iter()
                .map(|(slug, name)| (slug.to_string(), name.to_string()))
                .collect(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn lookups(&self) -> Vec<(String, String)> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaxonomyStore for FakeTaxonomy {
    async fn lookup_term_by_slug(
        &self,
        slug: &str,
        taxonomy: &str,
    ) -> anyhow::Result<Option<Term>> {
        self.lookups
            .lock()
            .unwrap()
            .push((slug.to_string(), taxonomy.to_string()));
        if taxonomy != "category" {
            return Ok(None);
        }
        Ok(self.terms.get(slug).map(|name| Term {
            name: name.clone(),
        }))
    }
}

pub struct FailingTaxonomy;

#[async_trait]
impl TaxonomyStore for FailingTaxonomy {
    async fn lookup_term_by_slug(
        &self,
        _slug: &str,
        _taxonomy: &str,
    ) -> anyhow::Result<Option<Term>> {
        Err(anyhow::anyhow!("taxonomy store unreachable"))
    }
}

/// Items per category, already newest first. Records every query.
#[derive(Default)]
pub struct FakeContent {
    items: HashMap<String, Vec<ContentItem>>,
    queries: Mutex<Vec<ContentQuery>>,
}

impl FakeContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, category: &str, items: Vec<ContentItem>) -> Self {
        self.items.insert(category.to_string(), items);
        self
    }

    pub fn queries(&self) -> Vec<ContentQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentStore for FakeContent {
    async fn query_content(&self, query: &ContentQuery) -> anyhow::Result<Vec<ContentItem>> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self
            .items
            .get(&query.category)
            .map(|items| items.iter().take(query.limit as usize).cloned().collect())
            .unwrap_or_default())
    }
}

pub struct FailingContent;

#[async_trait]
impl ContentStore for FailingContent {
    async fn query_content(&self, _query: &ContentQuery) -> anyhow::Result<Vec<ContentItem>> {
        Err(anyhow::anyhow!("content store unreachable"))
    }
}

pub struct FakeUsers {
    names: HashMap<String, String>,
}

impl FakeUsers {
    pub fn new(names: HashMap<&str, &str>) -> Self {
        Self {
            names: names
                .into_iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl UserDirectory for FakeUsers {
    async fn resolve_author_display_name(&self, author_id: &str) -> anyhow::Result<String> {
        Ok(self.names.get(author_id).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub struct RecordingMenu {
    pub pages: Vec<AdminPage>,
}

impl AdminMenu for RecordingMenu {
    fn register_admin_page(&mut self, page: AdminPage) {
        self.pages.push(page);
    }
}
