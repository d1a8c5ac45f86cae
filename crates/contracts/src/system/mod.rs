pub mod admin_menu;
pub mod auth;
