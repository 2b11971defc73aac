
/// Root of the Places web service used for text search, find-place and details.
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Desktop browser user agent. Maps pages and short-link redirects are served
/// differently (or refused) for bare client agents.
pub const DEFAULT_BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Clone)]
pub struct ResolverConfig {
    pub api_key: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    pub places_base_url: String,
    pub log_level: String,
}

impl ResolverConfig {
    /// Builds a config with every setting at its default except the API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_BROWSER_USER_AGENT.to_string(),
            places_base_url: DEFAULT_PLACES_BASE_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl std::fmt::Debug for ResolverConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverConfig")
            .field("api_key", &"[redacted]")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("places_base_url", &self.places_base_url)
            .field("log_level", &self.log_level)
            .finish()
    }
}
