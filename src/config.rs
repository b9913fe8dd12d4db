use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ExplorerConfig {
    /// Where the recipe catalog is fetched from
    #[serde(default)]
    pub source: SourceConfig,
}

/// Configuration for the catalog endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    /// URL of the JSON catalog endpoint
    #[serde(default = "default_url")]
    pub url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with the catalog request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_url() -> String {
    "https://dummyjson.com/recipes".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("recipe-explorer/{}", env!("CARGO_PKG_VERSION"))
}

impl ExplorerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_EXPLORER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_EXPLORER__SOURCE__URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration, see [`ExplorerConfig::load`]
pub fn load_config() -> Result<ExplorerConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_EXPLORER__SOURCE__TIMEOUT
        .add_source(
            Environment::with_prefix("RECIPE_EXPLORER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
