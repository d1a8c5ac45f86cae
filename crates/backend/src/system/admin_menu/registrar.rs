use crate::domain::a001_category::registry::ValidatedCategories;
use crate::projections::p001_category_content::service::{CategoryPage, CategoryPageFactory};
use crate::shared::platform::{AdminMenu, AdminPage};

/// Регистрация страниц категорий в меню админки.
///
/// One page per validated category, in registry order. Path keys are
/// `{namespace}/{slug}`, so a restart registers the same paths again.
pub struct RouteRegistrar {
    namespace: String,
    capability: String,
    taxonomy: String,
}

impl RouteRegistrar {
    pub fn new(
        namespace: impl Into<String>,
        capability: impl Into<String>,
        taxonomy: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            capability: capability.into(),
            taxonomy: taxonomy.into(),
        }
    }

    pub fn path_key(&self, slug: &str) -> String {
        format!("{}/{}", self.namespace, slug)
    }

    pub fn register_routes(
        &self,
        categories: &ValidatedCategories,
        factory: &CategoryPageFactory,
        menu: &mut dyn AdminMenu,
    ) {
        for definition in categories.iter() {
            let page = CategoryPage::from_definition(definition, &self.taxonomy);
            let title = format!("{} Content", definition.display_name());
            let path_key = self.path_key(definition.slug());

            tracing::info!("Registering admin page '{}' at {}", title, path_key);

            menu.register_admin_page(AdminPage {
                title: title.clone(),
                menu_title: title,
                capability: self.capability.clone(),
                path_key,
                handler: factory.handler_for(page),
            });
        }
    }
}
