use thiserror::Error;

/// Errors from the Places web service client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network, TLS, timeout, or non-2xx failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a status other than `OK` or `ZERO_RESULTS`.
    #[error("Places API status {status}: {message}")]
    ApiStatus { status: String, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid Places base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Errors from page fetches and short-link expansion.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error fetching page: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Errors constructing a [`crate::PlaceIdResolver`]. Resolution itself never fails.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Places(#[from] PlacesError),
}
