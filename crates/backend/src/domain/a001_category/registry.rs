use std::sync::Arc;

use contracts::domain::a001_category::aggregate::{CategoryDefinition, CategoryError};
use indexmap::IndexMap;

use crate::shared::config::CategoryConfigEntry;

/// Configured categories keyed by slug, in configuration order.
///
/// Only the validator removes entries. Once validation is done the registry
/// is consumed by [`CategoryRegistry::freeze`] and never changes again.
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    entries: IndexMap<String, CategoryDefinition>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definitions(
        definitions: impl IntoIterator<Item = CategoryDefinition>,
    ) -> Result<Self, CategoryError> {
        let mut registry = Self::new();
        for definition in definitions {
            registry.insert(definition)?;
        }
        Ok(registry)
    }

    /// Построение реестра из секции `[[categories]]` конфигурации
    pub fn from_config(entries: &[CategoryConfigEntry]) -> Result<Self, CategoryError> {
        let definitions = entries
            .iter()
            .map(|e| CategoryDefinition::new(e.slug.clone(), e.name.clone(), e.count))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_definitions(definitions)
    }

    pub fn insert(&mut self, definition: CategoryDefinition) -> Result<(), CategoryError> {
        if self.entries.contains_key(definition.slug()) {
            return Err(CategoryError::DuplicateSlug(definition.slug().to_string()));
        }
        self.entries
            .insert(definition.slug().to_string(), definition);
        Ok(())
    }

    /// Removes an entry, keeping the order of the rest.
    pub(crate) fn remove(&mut self, slug: &str) -> Option<CategoryDefinition> {
        self.entries.shift_remove(slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.entries.values()
    }

    pub fn slugs(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn freeze(self) -> ValidatedCategories {
        ValidatedCategories {
            entries: self.entries.into_values().collect::<Vec<_>>().into(),
        }
    }
}

/// Read-only snapshot of the categories that passed validation.
/// Cheap to clone, shared by every request.
#[derive(Debug, Clone)]
pub struct ValidatedCategories {
    entries: Arc<[CategoryDefinition]>,
}

impl ValidatedCategories {
    pub fn iter(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::definition;

    #[test]
    fn test_from_config_keeps_order() {
        let entries = vec![
            CategoryConfigEntry {
                slug: "sports".into(),
                name: "Sports".into(),
                count: 25,
            },
            CategoryConfigEntry {
                slug: "animals".into(),
                name: "Animals".into(),
                count: 10,
            },
        ];
        let registry = CategoryRegistry::from_config(&entries).unwrap();
        assert_eq!(registry.slugs(), vec!["sports", "animals"]);
        assert_eq!(registry.iter().nth(1).unwrap().item_limit(), 10);
    }

    #[test]
    fn test_from_config_rejects_zero_count() {
        let entries = vec![CategoryConfigEntry {
            slug: "sports".into(),
            name: "Sports".into(),
            count: 0,
        }];
        assert_eq!(
            CategoryRegistry::from_config(&entries).unwrap_err(),
            CategoryError::ZeroLimit("sports".into())
        );
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let result = CategoryRegistry::from_definitions(vec![
            definition("sports", "Sports", 25),
            definition("sports", "Sport", 5),
        ]);
        assert_eq!(
            result.unwrap_err(),
            CategoryError::DuplicateSlug("sports".into())
        );
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut registry = CategoryRegistry::from_definitions(vec![
            definition("sports", "Sports", 25),
            definition("animals", "Animals", 10),
            definition("business", "Business", 12),
        ])
        .unwrap();

        let removed = registry.remove("animals").unwrap();
        assert_eq!(removed.display_name(), "Animals");
        assert_eq!(registry.slugs(), vec!["sports", "business"]);
        assert!(registry.remove("animals").is_none());
    }

    #[test]
    fn test_freeze_keeps_order() {
        let registry = CategoryRegistry::from_definitions(vec![
            definition("business", "Business", 12),
            definition("sports", "Sports", 25),
        ])
        .unwrap();
        let frozen = registry.freeze();
        let slugs: Vec<&str> = frozen.iter().map(|d| d.slug()).collect();
        assert_eq!(slugs, vec!["business", "sports"]);
        assert_eq!(frozen.len(), 2);
    }
}
