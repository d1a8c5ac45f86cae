use std::sync::Arc;

use axum::{middleware, response::Html, routing::get, Router};
use contracts::system::admin_menu::AdminMenuEntry;

use super::layout::{render_admin_shell, render_index_body};
use crate::shared::error::AppError;
use crate::shared::platform::{AdminMenu, AdminPage};
use crate::system::auth::middleware::{require_capability, CapabilityGate};
use crate::system::notices::AdminNotices;

/// Меню админки поверх axum: каждая страница становится GET роутом.
#[derive(Default)]
pub struct AxumAdminMenu {
    pages: Vec<AdminPage>,
}

impl AdminMenu for AxumAdminMenu {
    fn register_admin_page(&mut self, page: AdminPage) {
        self.pages.push(page);
    }
}

pub fn admin_url(path_key: &str) -> String {
    format!("/admin/{}", path_key)
}

impl AxumAdminMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Menu entries in registration order.
    pub fn entries(&self) -> Vec<AdminMenuEntry> {
        self.pages
            .iter()
            .map(|page| AdminMenuEntry {
                title: page.title.clone(),
                menu_title: page.menu_title.clone(),
                capability: page.capability.clone(),
                path_key: page.path_key.clone(),
                url: admin_url(&page.path_key),
            })
            .collect()
    }

    /// `/admin` index plus one route per registered page.
    ///
    /// Every route is gated by the page's capability. Notices are rendered
    /// on each request, after the handler has produced its body.
    pub fn into_router(
        self,
        notices: Arc<AdminNotices>,
        secret: Arc<String>,
        index_capability: &str,
    ) -> Router {
        let menu = Arc::new(self.entries());

        let index = {
            let menu = Arc::clone(&menu);
            let notices = Arc::clone(&notices);
            get(move || {
                let menu = Arc::clone(&menu);
                let notices = Arc::clone(&notices);
                async move {
                    Html(render_admin_shell(
                        "Categories",
                        &menu,
                        &notices.render_all(),
                        &render_index_body(&menu),
                    ))
                }
            })
            .layer(middleware::from_fn_with_state(
                CapabilityGate::new(index_capability, Arc::clone(&secret)),
                require_capability,
            ))
        };

        let mut router = Router::new().route("/admin", index);

        for page in self.pages {
            let url = admin_url(&page.path_key);
            let gate = CapabilityGate::new(page.capability, Arc::clone(&secret));
            let handler = page.handler;
            let title = page.title;
            let menu = Arc::clone(&menu);
            let notices = Arc::clone(&notices);

            let method_router = get(move || {
                let handler = Arc::clone(&handler);
                let title = title.clone();
                let menu = Arc::clone(&menu);
                let notices = Arc::clone(&notices);
                async move {
                    let body = handler().await.map_err(AppError::from)?;
                    Ok::<_, AppError>(Html(render_admin_shell(
                        &title,
                        &menu,
                        &notices.render_all(),
                        &body,
                    )))
                }
            })
            .layer(middleware::from_fn_with_state(gate, require_capability));

            router = router.route(&url, method_router);
        }

        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::platform::PageHandler;

    fn page(slug: &str, name: &str) -> AdminPage {
        let body = format!("<h1>{} Content</h1>", name);
        let handler: PageHandler = Arc::new(move || {
            let body = body.clone();
            Box::pin(async move { Ok(body) })
        });
        AdminPage {
            title: format!("{} Content", name),
            menu_title: format!("{} Content", name),
            capability: "manage_categories".into(),
            path_key: format!("dfm-wp-public/{}", slug),
            handler,
        }
    }

    #[test]
    fn test_entries_keep_registration_order() {
        let mut menu = AxumAdminMenu::new();
        menu.register_admin_page(page("sports", "Sports"));
        menu.register_admin_page(page("animals", "Animals"));

        let entries = menu.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].url, "/admin/dfm-wp-public/sports");
        assert_eq!(entries[1].title, "Animals Content");
        assert_eq!(entries[1].path_key, "dfm-wp-public/animals");
    }
}
