use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Settings for talking to the recipe API and sizing a search
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// Base URL of the recipe API, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Maximum number of candidate meals whose details are fetched
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            max_candidates: default_max_candidates(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_candidates() -> usize {
    24
}

fn default_user_agent() -> String {
    format!("meal-finder/{}", env!("CARGO_PKG_VERSION"))
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEAL_FINDER__ prefix
    /// 2. meal-finder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEAL_FINDER__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Endpoint URL for a path such as `filter.php`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Load configuration from file and environment variables
///
/// See [`FinderConfig::load`] for the precedence rules.
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("meal-finder").required(false))
        .add_source(
            Environment::with_prefix("MEAL_FINDER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
