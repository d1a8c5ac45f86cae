use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Формат даты публикации в таблицах админки
pub const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// Read model
// ============================================================================

/// Опубликованный материал (только чтение, владелец - хранилище контента)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: i64,
    pub title: String,
    #[serde(rename = "authorId")]
    pub author_id: String,
    #[serde(rename = "publishedAt")]
    pub published_at: NaiveDateTime,
}

// ============================================================================
// Query
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Publish,
    Draft,
}

impl ContentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ContentStatus::Publish => "publish",
            ContentStatus::Draft => "draft",
        }
    }
}

/// Sort key of a content query. Category pages only list by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentOrderBy {
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Desc,
}

/// Filter handed to the content store. The store owns ordering; callers
/// render results in the order they come back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentQuery {
    pub status: ContentStatus,
    pub category: String,
    pub taxonomy: String,
    #[serde(rename = "orderBy")]
    pub order_by: ContentOrderBy,
    pub direction: SortDirection,
    pub limit: u32,
}

impl ContentQuery {
    /// Most recent published items of one category.
    pub fn latest_published(
        category: impl Into<String>,
        taxonomy: impl Into<String>,
        limit: u32,
    ) -> Self {
        Self {
            status: ContentStatus::Publish,
            category: category.into(),
            taxonomy: taxonomy.into(),
            order_by: ContentOrderBy::Date,
            direction: SortDirection::Desc,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_published_query() {
        let query = ContentQuery::latest_published("animals", "category", 10);
        assert_eq!(query.status, ContentStatus::Publish);
        assert_eq!(query.order_by, ContentOrderBy::Date);
        assert_eq!(query.direction, SortDirection::Desc);
        assert_eq!(query.limit, 10);
        assert_eq!(query.category, "animals");
    }
}
