use serde::{Deserialize, Serialize};

/// Пункт меню админки (зарегистрированная страница)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminMenuEntry {
    pub title: String,
    #[serde(rename = "menuTitle")]
    pub menu_title: String,
    pub capability: String,
    #[serde(rename = "pathKey")]
    pub path_key: String,
    pub url: String,
}
