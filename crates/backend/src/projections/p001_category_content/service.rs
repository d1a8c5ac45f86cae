use std::sync::Arc;

use contracts::domain::a001_category::aggregate::CategoryDefinition;
use contracts::domain::a002_content_item::aggregate::ContentQuery;

use super::render::{render_category_posts, ContentRow};
use crate::shared::platform::{ContentStore, PageFuture, PageHandler, UserDirectory};

/// Values one category page needs, copied out of its definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPage {
    pub slug: String,
    pub display_name: String,
    pub item_limit: u32,
    pub taxonomy: String,
}

impl CategoryPage {
    pub fn from_definition(definition: &CategoryDefinition, taxonomy: &str) -> Self {
        Self {
            slug: definition.slug().to_string(),
            display_name: definition.display_name().to_string(),
            item_limit: definition.item_limit(),
            taxonomy: taxonomy.to_string(),
        }
    }

    pub fn query(&self) -> ContentQuery {
        ContentQuery::latest_published(&self.slug, &self.taxonomy, self.item_limit)
    }
}

/// Последние опубликованные материалы категории в виде HTML.
///
/// An empty result and a store that found nothing look the same here: both
/// render the placeholder. Store errors are passed through.
pub async fn handle(
    page: &CategoryPage,
    content: &dyn ContentStore,
    users: &dyn UserDirectory,
) -> anyhow::Result<String> {
    let items = content.query_content(&page.query()).await?;

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let author = users.resolve_author_display_name(&item.author_id).await?;
        rows.push(ContentRow {
            id: item.id,
            title: item.title,
            author,
            published_at: item.published_at,
        });
    }

    tracing::debug!(
        "Rendering category '{}' with {} item(s), limit {}",
        page.slug,
        rows.len(),
        page.item_limit
    );

    Ok(render_category_posts(&page.display_name, &rows))
}

/// Builds page handlers bound to the content and user stores.
#[derive(Clone)]
pub struct CategoryPageFactory {
    content: Arc<dyn ContentStore>,
    users: Arc<dyn UserDirectory>,
}

impl CategoryPageFactory {
    pub fn new(content: Arc<dyn ContentStore>, users: Arc<dyn UserDirectory>) -> Self {
        Self { content, users }
    }

    /// The returned handler owns its own copy of `page`.
    pub fn handler_for(&self, page: CategoryPage) -> PageHandler {
        let page = Arc::new(page);
        let content = Arc::clone(&self.content);
        let users = Arc::clone(&self.users);

        Arc::new(move || -> PageFuture {
            let page = Arc::clone(&page);
            let content = Arc::clone(&content);
            let users = Arc::clone(&users);
            Box::pin(async move { handle(&page, content.as_ref(), users.as_ref()).await })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{definition, item, FailingContent, FakeContent, FakeUsers};
    use contracts::domain::a002_content_item::aggregate::{
        ContentOrderBy, ContentStatus, SortDirection,
    };
    use maplit::hashmap;

    fn animals_page() -> CategoryPage {
        CategoryPage::from_definition(&definition("animals", "Animals", 10), "category")
    }

    #[tokio::test]
    async fn test_query_is_built_from_page() {
        let content = FakeContent::new();
        let users = FakeUsers::new(hashmap! {});

        handle(&animals_page(), &content, &users).await.unwrap();

        let queries = content.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].status, ContentStatus::Publish);
        assert_eq!(queries[0].category, "animals");
        assert_eq!(queries[0].taxonomy, "category");
        assert_eq!(queries[0].order_by, ContentOrderBy::Date);
        assert_eq!(queries[0].direction, SortDirection::Desc);
        assert_eq!(queries[0].limit, 10);
    }

    #[tokio::test]
    async fn test_empty_category_renders_placeholder() {
        let content = FakeContent::new();
        let users = FakeUsers::new(hashmap! {});

        let html = handle(&animals_page(), &content, &users).await.unwrap();

        assert!(html.contains("There are no Animals posts. Check back later."));
        assert!(!html.contains("<table"));
    }

    #[tokio::test]
    async fn test_single_item_row() {
        let content =
            FakeContent::new().with_items("animals", vec![item(7, "Win", "alice", "2024-01-01")]);
        let users = FakeUsers::new(hashmap! { "alice" => "Alice Walker" });

        let html = handle(&animals_page(), &content, &users).await.unwrap();

        assert!(html.contains("<table"));
        assert!(html.contains(r#"<tr id="post-7""#));
        assert!(html.contains("<td>Win</td>"));
        assert!(html.contains("<td>Alice Walker</td>"));
        assert!(html.contains("2024-01-01"));
    }

    #[tokio::test]
    async fn test_store_order_is_kept() {
        let content = FakeContent::new().with_items(
            "animals",
            vec![
                item(2, "Second newest", "bob", "2024-03-01"),
                item(1, "Out of order on purpose", "alice", "2024-05-01"),
            ],
        );
        let users = FakeUsers::new(hashmap! { "alice" => "Alice", "bob" => "Bob" });

        let html = handle(&animals_page(), &content, &users).await.unwrap();

        assert!(html.find("Second newest").unwrap() < html.find("Out of order").unwrap());
    }

    #[tokio::test]
    async fn test_unknown_author_renders_empty_cell() {
        let content =
            FakeContent::new().with_items("animals", vec![item(7, "Win", "ghost", "2024-01-01")]);
        let users = FakeUsers::new(hashmap! {});

        let html = handle(&animals_page(), &content, &users).await.unwrap();

        assert!(html.contains("<td>Win</td><td></td>"));
    }

    #[tokio::test]
    async fn test_store_failure_is_propagated() {
        let users = FakeUsers::new(hashmap! {});
        let result = handle(&animals_page(), &FailingContent, &users).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_factory_handler_can_run_repeatedly() {
        let content = Arc::new(
            FakeContent::new().with_items("animals", vec![item(7, "Win", "alice", "2024-01-01")]),
        );
        let users = Arc::new(FakeUsers::new(hashmap! { "alice" => "Alice" }));
        let factory = CategoryPageFactory::new(content.clone(), users);
        let handler = factory.handler_for(animals_page());

        let first = handler().await.unwrap();
        let second = handler().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(content.queries().len(), 2);
    }
}
