use std::sync::Arc;

use axum::{extract::State, Json};
use contracts::domain::a001_category::validation::ValidationResult;
use contracts::system::admin_menu::AdminMenuEntry;

/// Read-only snapshot of the startup outcome
#[derive(Clone)]
pub struct CategoriesState {
    pub menu: Arc<Vec<AdminMenuEntry>>,
    pub validation: Arc<ValidationResult>,
}

/// GET /api/categories
pub async fn list_pages(State(state): State<CategoriesState>) -> Json<Vec<AdminMenuEntry>> {
    Json(state.menu.as_ref().clone())
}

/// GET /api/categories/validation
pub async fn validation_report(State(state): State<CategoriesState>) -> Json<ValidationResult> {
    Json(state.validation.as_ref().clone())
}
