use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
///
/// No variable is required: the defaults point at the public Nominatim and
/// Overpass instances.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(raw.trim_end_matches('/').to_string())
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected an http(s) URL, got \"{raw}\""),
            })
        }
    };

    let env = parse_environment(&or_default("LAYERA_ENV", "development"))?;
    let log_level = or_default("LAYERA_LOG_LEVEL", "info");

    let nominatim_base_url = parse_url(
        "LAYERA_NOMINATIM_URL",
        "https://nominatim.openstreetmap.org",
    )?;
    let overpass_api_url = parse_url(
        "LAYERA_OVERPASS_URL",
        "https://overpass-api.de/api/interpreter",
    )?;

    let user_agent = or_default("LAYERA_USER_AGENT", "layera/0.1 (boundary-lookup)");
    let accept_language = or_default("LAYERA_ACCEPT_LANGUAGE", "el-GR,el;q=0.9,en;q=0.5");

    let request_timeout_secs = parse_u64("LAYERA_REQUEST_TIMEOUT_SECS", "30")?;
    let search_debounce_ms = parse_u64("LAYERA_SEARCH_DEBOUNCE_MS", "300")?;
    let max_retries = parse_u32("LAYERA_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("LAYERA_RETRY_BACKOFF_BASE_SECS", "5")?;

    let boundaries_path = lookup("LAYERA_BOUNDARIES_PATH").ok().map(PathBuf::from);

    Ok(AppConfig {
        env,
        log_level,
        nominatim_base_url,
        overpass_api_url,
        user_agent,
        accept_language,
        request_timeout_secs,
        search_debounce_ms,
        max_retries,
        retry_backoff_base_secs,
        boundaries_path,
    })
}

fn parse_environment(raw: &str) -> Result<Environment, ConfigError> {
    match raw {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LAYERA_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
