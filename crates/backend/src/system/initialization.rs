use std::sync::Arc;

use anyhow::{Context, Result};
use contracts::domain::a001_category::aggregate::{is_valid_namespace, CategoryError};
use contracts::domain::a001_category::validation::ValidationResult;

use crate::domain::a001_category::registry::CategoryRegistry;
use crate::domain::a001_category::repository::DbTaxonomyStore;
use crate::domain::a001_category::validator::CategoryValidator;
use crate::domain::a002_content_item::repository::DbContentStore;
use crate::projections::p001_category_content::service::CategoryPageFactory;
use crate::shared::config::{AdminConfig, CategoryConfigEntry};
use crate::shared::platform::Platform;
use crate::system::admin_menu::registrar::RouteRegistrar;
use crate::system::admin_menu::router::AxumAdminMenu;
use crate::system::notices::{reporter, AdminNotices};
use crate::system::users::repository::DbUserDirectory;

/// Stores backed by the global SQLite connection
pub fn sqlite_platform() -> Platform {
    Platform {
        taxonomy: Arc::new(DbTaxonomyStore),
        content: Arc::new(DbContentStore),
        users: Arc::new(DbUserDirectory),
    }
}

/// Результат запуска: отчёт проверки, меню и уведомления.
pub struct AdminApp {
    pub validation: ValidationResult,
    pub menu: AxumAdminMenu,
    pub notices: AdminNotices,
}

/// Startup sequence: load, validate, report, then register.
///
/// Validation runs exactly once, before any page is registered. A taxonomy
/// store failure or an unusable `[admin] namespace` aborts startup.
pub async fn bootstrap(
    admin: &AdminConfig,
    entries: &[CategoryConfigEntry],
    platform: Platform,
) -> Result<AdminApp> {
    if !is_valid_namespace(&admin.namespace) {
        return Err(CategoryError::InvalidNamespace(admin.namespace.clone()))
            .context("Invalid admin configuration");
    }

    let mut registry =
        CategoryRegistry::from_config(entries).context("Invalid category configuration")?;
    tracing::info!("Loaded {} configured categories", registry.len());

    let validator = CategoryValidator::new(Arc::clone(&platform.taxonomy), &admin.taxonomy);
    let validation = validator
        .validate(&mut registry)
        .await
        .context("Category validation failed")?;

    let mut notices = AdminNotices::new();
    reporter::report(&validation, &mut notices);

    let categories = registry.freeze();

    let factory = CategoryPageFactory::new(platform.content, platform.users);
    let registrar = RouteRegistrar::new(&admin.namespace, &admin.capability, &admin.taxonomy);
    let mut menu = AxumAdminMenu::new();
    registrar.register_routes(&categories, &factory, &mut menu);

    if categories.is_empty() {
        tracing::warn!("No valid categories left, the admin menu will be empty");
    }
    tracing::info!(
        "Registered {} category pages, {} removed",
        categories.len(),
        validation.removed.len()
    );

    Ok(AdminApp {
        validation,
        menu,
        notices,
    })
}
