use serde::{Deserialize, Serialize};

/// Категория, удалённая при проверке по таксономии
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedCategory {
    pub slug: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Outcome of checking the configured categories against the taxonomy store.
///
/// Display names are captured when an entry is dropped, so they outlive the
/// registry entry itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub removed: Vec<RemovedCategory>,
}

impl ValidationResult {
    pub fn any_invalid(&self) -> bool {
        !self.removed.is_empty()
    }

    pub fn removed_slugs(&self) -> impl Iterator<Item = &str> {
        self.removed.iter().map(|r| r.slug.as_str())
    }
}
