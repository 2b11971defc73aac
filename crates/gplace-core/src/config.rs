use crate::app_config::{
    ResolverConfig, DEFAULT_BROWSER_USER_AGENT, DEFAULT_PLACES_BASE_URL,
};
use crate::ConfigError;

/// Load resolver configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_resolver_config() -> Result<ResolverConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_resolver_config_from_env()
}

/// Load resolver configuration from environment variables already in the process.
///
/// Unlike [`load_resolver_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_resolver_config_from_env() -> Result<ResolverConfig, ConfigError> {
    build_resolver_config(|key| std::env::var(key))
}

/// Parsing and validation core, decoupled from the real environment so it can
/// be driven by a `HashMap` lookup in tests.
fn build_resolver_config<F>(lookup: F) -> Result<ResolverConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_secs = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let secs = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "timeout must be at least 1 second".to_string(),
            });
        }
        Ok(secs)
    };

    let api_key = require("GOOGLE_MAPS_API_KEY")?;
    let request_timeout_secs = parse_secs("GPLACE_REQUEST_TIMEOUT_SECS", "15")?;
    let connect_timeout_secs = parse_secs("GPLACE_CONNECT_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("GPLACE_USER_AGENT", DEFAULT_BROWSER_USER_AGENT);
    let places_base_url = or_default("GPLACE_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let log_level = or_default("GPLACE_LOG_LEVEL", "info");

    if !(places_base_url.starts_with("http://") || places_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "GPLACE_PLACES_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{places_base_url}'"),
        });
    }

    Ok(ResolverConfig {
        api_key,
        request_timeout_secs,
        connect_timeout_secs,
        user_agent,
        places_base_url,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
