use std::sync::Arc;

use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::categories::{self, CategoriesState};
use crate::shared::config::AdminConfig;
use crate::system::auth::middleware::{require_capability, CapabilityGate};
use crate::system::initialization::AdminApp;
use crate::system::middleware::request_logger::request_logger;

/// Конфигурация всех роутов приложения
pub fn configure_routes(app: AdminApp, admin: &AdminConfig, secret: Arc<String>) -> Router {
    let state = CategoriesState {
        menu: Arc::new(app.menu.entries()),
        validation: Arc::new(app.validation),
    };

    // ========================================
    // CATEGORY API (same capability as the pages)
    // ========================================
    let api = Router::new()
        .route("/api/categories", get(categories::list_pages))
        .route(
            "/api/categories/validation",
            get(categories::validation_report),
        )
        .route_layer(middleware::from_fn_with_state(
            CapabilityGate::new(&admin.capability, Arc::clone(&secret)),
            require_capability,
        ))
        .with_state(state);

    // ========================================
    // ADMIN PAGES
    // ========================================
    let pages = app
        .menu
        .into_router(Arc::new(app.notices), secret, &admin.capability);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(pages)
        .merge(api)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
