use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Ошибки статической конфигурации категорий
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("category slug must not be empty")]
    EmptySlug,

    #[error("category slug '{0}' may only contain lowercase letters, digits, '-' and '_'")]
    InvalidSlug(String),

    #[error("category '{0}' must have a non-empty display name")]
    EmptyName(String),

    #[error("category '{0}' must list at least one item")]
    ZeroLimit(String),

    #[error("category '{0}' is configured more than once")]
    DuplicateSlug(String),

    #[error("admin namespace '{0}' must be slug segments separated by '/'")]
    InvalidNamespace(String),
}

// ============================================================================
// Aggregate
// ============================================================================

/// Категория, для которой строится страница в админке.
///
/// The slug is the stable key shared with the taxonomy store and the admin
/// route; it cannot change once the definition exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDefinition {
    slug: String,
    #[serde(rename = "displayName")]
    display_name: String,
    #[serde(rename = "itemLimit")]
    item_limit: u32,
}

impl CategoryDefinition {
    pub fn new(
        slug: impl Into<String>,
        display_name: impl Into<String>,
        item_limit: u32,
    ) -> Result<Self, CategoryError> {
        let slug = slug.into();
        let display_name = display_name.into();

        if slug.is_empty() {
            return Err(CategoryError::EmptySlug);
        }
        if !is_valid_slug(&slug) {
            return Err(CategoryError::InvalidSlug(slug));
        }
        if display_name.is_empty() {
            return Err(CategoryError::EmptyName(slug));
        }
        if item_limit == 0 {
            return Err(CategoryError::ZeroLimit(slug));
        }

        Ok(Self {
            slug,
            display_name,
            item_limit,
        })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn item_limit(&self) -> u32 {
        self.item_limit
    }
}

/// Slugs end up as URL path segments, so only route-safe characters pass.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Namespace prefix of admin page paths: one or more slug segments joined by `/`.
pub fn is_valid_namespace(namespace: &str) -> bool {
    namespace.split('/').all(is_valid_slug)
}
