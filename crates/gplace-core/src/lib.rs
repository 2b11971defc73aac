//! Shared configuration and domain types for place identifier resolution.

pub mod app_config;
pub mod config;
pub mod types;

pub use app_config::{
    ResolverConfig, DEFAULT_BROWSER_USER_AGENT, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_PLACES_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
};
pub use config::{load_resolver_config, load_resolver_config_from_env};
pub use types::{GeoPoint, PlaceId, ResolutionOptions};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
