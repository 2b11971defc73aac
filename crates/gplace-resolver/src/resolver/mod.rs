//! Place identifier resolution pipeline.
//!
//! Resolution runs in a fixed order and stops at the first stage that yields
//! an identifier:
//!
//! 1. literal `place_id` in the original URL
//! 2. short-link expansion, then literal `place_id` in the landed URL
//! 3. search-intent blob (`pvq`/`lqi`), anchored by page coordinates when found
//! 4. generic search query (`/search?q=...`)
//! 5. legacy `cid` details lookup
//! 6. `/place/<name>` segment, anchored by `!3d!4d` path coordinates when found
//!
//! Stages 3-6 share one signature and are tried in list order. Every stage
//! absorbs its own failures, so resolution never returns an error.

mod strategies;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use gplace_core::{PlaceId, ResolutionOptions, ResolverConfig};
use reqwest::Client;

use crate::classify::is_short_link;
use crate::direct::extract_direct_place_id;
use crate::error::ResolveError;
use crate::page::expand_short_link;
use crate::places::PlacesClient;

type StageFuture<'a> = Pin<Box<dyn Future<Output = Option<PlaceId>> + Send + 'a>>;
type Stage = for<'a> fn(&'a PlaceIdResolver, &'a str) -> StageFuture<'a>;

/// URL-shape stages, in priority order. Not reorderable: a URL may match
/// several shapes and the earlier stage owns it.
const STAGES: [(&str, Stage); 4] = [
    ("search_intent", strategies::search_intent_stage),
    ("generic_search", strategies::generic_search_stage),
    ("alternate_id", strategies::alternate_id_stage),
    ("generic_place", strategies::generic_place_stage),
];

/// Resolves arbitrary Maps URLs to place identifiers.
///
/// Holds no per-resolution state, so one instance can serve concurrent
/// resolutions.
pub struct PlaceIdResolver {
    http: Client,
    places: PlacesClient,
    user_agent: String,
}

impl PlaceIdResolver {
    /// Creates a resolver with default timeouts, user agent and endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Http`] if the HTTP client cannot be built.
    pub fn new(options: &ResolutionOptions) -> Result<Self, ResolveError> {
        Self::from_config(&ResolverConfig::new(options.api_key.clone()))
    }

    /// Creates a resolver from a full configuration.
    ///
    /// The request timeout applies to every network call the pipeline makes;
    /// a timeout is handled like any other transport failure.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Http`] if the HTTP client cannot be built, or
    /// [`ResolveError::Places`] if the Places base URL is invalid.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, ResolveError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        let places = PlacesClient::with_client(
            http.clone(),
            &config.api_key,
            &config.places_base_url,
        )?;

        Ok(Self {
            http,
            places,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Resolve `url` to a place identifier, or `None` when no stage can.
    pub async fn resolve(&self, url: &str) -> Option<PlaceId> {
        tracing::debug!(url, "resolving place id");

        if let Some(id) = extract_direct_place_id(url) {
            tracing::info!(stage = "direct", place_id = %id, "resolved place id");
            return Some(id);
        }

        let mut current = url.to_owned();
        if is_short_link(url) {
            current = expand_short_link(&self.http, url, &self.user_agent).await;
            if let Some(id) = extract_direct_place_id(&current) {
                tracing::info!(stage = "expanded_direct", place_id = %id, "resolved place id");
                return Some(id);
            }
        }

        for (name, stage) in STAGES {
            if let Some(id) = stage(self, &current).await {
                tracing::info!(stage = name, place_id = %id, "resolved place id");
                return Some(id);
            }
        }

        tracing::info!(url, "no stage resolved a place id");
        None
    }
}

/// One-shot resolution with default settings.
///
/// Never fails: a resolver that cannot be constructed is logged and reported
/// as `None`, like any other unresolvable URL.
pub async fn resolve_place_id(url: &str, options: &ResolutionOptions) -> Option<PlaceId> {
    match PlaceIdResolver::new(options) {
        Ok(resolver) => resolver.resolve(url).await,
        Err(e) => {
            tracing::error!(error = %e, "could not build resolver");
            None
        }
    }
}
