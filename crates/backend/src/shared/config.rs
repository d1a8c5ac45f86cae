use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    /// Order of the entries is the order of the admin menu.
    #[serde(default)]
    pub categories: Vec<CategoryConfigEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default)]
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AdminConfig {
    /// Prefix of every category page path key
    pub namespace: String,
    /// Capability required to open any category page
    pub capability: String,
    /// Taxonomy the category slugs are looked up in
    pub taxonomy: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            namespace: "dfm-wp-public".to_string(),
            capability: "manage_categories".to_string(),
            taxonomy: "category".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub print_dev_token: bool,
}

/// One `[[categories]]` table: slug, display name and how many items to list.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CategoryConfigEntry {
    pub slug: String,
    pub name: String,
    pub count: u32,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/app.db"
seed_demo_data = true

[server]
host = "0.0.0.0"
port = 3000

[admin]
namespace = "dfm-wp-public"
capability = "manage_categories"
taxonomy = "category"

[auth]
jwt_secret = "dev-secret-change-me"
print_dev_token = true

[[categories]]
slug = "sports"
name = "Sports"
count = 25

[[categories]]
slug = "animals"
name = "Animals"
count = 10

[[categories]]
slug = "business"
name = "Business"
count = 12

[[categories]]
slug = "entertainment"
name = "Entertainment"
count = 50

[[categories]]
slug = "world-and-news"
name = "World and News"
count = 100
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
        assert_eq!(config.admin.capability, "manage_categories");
        assert_eq!(config.admin.namespace, "dfm-wp-public");
    }

    #[test]
    fn test_default_categories_keep_file_order() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        let slugs: Vec<&str> = config.categories.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec!["sports", "animals", "business", "entertainment", "world-and-news"]
        );
        assert_eq!(config.categories[4].name, "World and News");
        assert_eq!(config.categories[4].count, 100);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config(
            r#"
            [database]
            path = "/tmp/app.db"
            "#,
        )
        .unwrap();
        assert!(!config.database.seed_demo_data);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.admin.taxonomy, "category");
        assert!(config.categories.is_empty());
        assert_eq!(
            get_database_path(&config).unwrap(),
            PathBuf::from("/tmp/app.db")
        );
    }

    #[test]
    fn test_category_without_count_is_rejected() {
        let result = parse_config(
            r#"
            [database]
            path = "app.db"

            [[categories]]
            slug = "sports"
            name = "Sports"
            "#,
        );
        assert!(result.is_err());
    }
}
