use std::sync::Arc;

use anyhow::Context;
use contracts::domain::a001_category::validation::{RemovedCategory, ValidationResult};

use super::registry::CategoryRegistry;
use crate::shared::platform::TaxonomyStore;

/// Проверка категорий по таксономии.
///
/// A category survives only when the taxonomy has a term with its slug and
/// the term name equals the configured display name exactly. Anything else is
/// dropped from the registry and recorded, the rest carries on.
pub struct CategoryValidator {
    taxonomy: Arc<dyn TaxonomyStore>,
    taxonomy_kind: String,
}

impl CategoryValidator {
    pub fn new(taxonomy: Arc<dyn TaxonomyStore>, taxonomy_kind: impl Into<String>) -> Self {
        Self {
            taxonomy,
            taxonomy_kind: taxonomy_kind.into(),
        }
    }

    /// Errors only when the taxonomy store itself fails.
    pub async fn validate(&self, registry: &mut CategoryRegistry) -> anyhow::Result<ValidationResult> {
        let mut invalid = Vec::new();

        for definition in registry.iter() {
            let term = self
                .taxonomy
                .lookup_term_by_slug(definition.slug(), &self.taxonomy_kind)
                .await
                .with_context(|| format!("Taxonomy lookup failed for '{}'", definition.slug()))?;

            match term {
                Some(term) if term.name == definition.display_name() => {}
                Some(term) => {
                    tracing::warn!(
                        "Category '{}' is named '{}' in the taxonomy, expected '{}'",
                        definition.slug(),
                        term.name,
                        definition.display_name()
                    );
                    invalid.push(definition.slug().to_string());
                }
                None => {
                    tracing::warn!(
                        "Category '{}' does not exist in taxonomy '{}'",
                        definition.slug(),
                        self.taxonomy_kind
                    );
                    invalid.push(definition.slug().to_string());
                }
            }
        }

        let mut result = ValidationResult::default();
        for slug in invalid {
            if let Some(removed) = registry.remove(&slug) {
                result.removed.push(RemovedCategory {
                    slug: removed.slug().to_string(),
                    display_name: removed.display_name().to_string(),
                });
            }
        }

        tracing::info!(
            "Category validation finished: {} valid, {} removed",
            registry.len(),
            result.removed.len()
        );

        Ok(result)
    }
}
