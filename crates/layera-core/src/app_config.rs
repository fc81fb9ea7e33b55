use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration for the geocoding and boundary-resolution pipeline.
///
/// Every knob has a default pointing at the public OSM infrastructure, so an
/// empty environment produces a working config. The `User-Agent` default
/// identifies the application to the Nominatim operators, which their usage
/// policy requires.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Base URL of the Nominatim-compatible geocoding service (no trailing slash).
    pub nominatim_base_url: String,
    /// Overpass interpreter endpoint used for relation lookups.
    pub overpass_api_url: String,
    pub user_agent: String,
    /// Value sent as `accept-language` on search requests.
    pub accept_language: String,
    pub request_timeout_secs: u64,
    /// Debounce window for interactive search sessions, in milliseconds.
    pub search_debounce_ms: u64,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    /// Optional path to a boundary fallback table overriding the bundled one.
    pub boundaries_path: Option<PathBuf>,
}
