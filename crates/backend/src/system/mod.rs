pub mod admin_menu;
pub mod auth;
pub mod initialization;
pub mod middleware;
pub mod notices;
pub mod tracing;
pub mod users;
