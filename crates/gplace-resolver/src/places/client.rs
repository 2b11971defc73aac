//! HTTP client for the Places web service.
//!
//! Wraps `reqwest` with API key handling, status-envelope checking and typed
//! response decoding. `OK` and `ZERO_RESULTS` are successes; any other status
//! surfaces as [`PlacesError::ApiStatus`].

use std::time::Duration;

use gplace_core::{GeoPoint, PlaceId, DEFAULT_PLACES_BASE_URL};
use reqwest::{Client, Url};

use super::score::select_best;
use super::types::{
    ApiResponse, DetailsResponse, FindPlaceResponse, PlaceRef, PlaceResult, SearchCandidate,
    TextSearchResponse,
};
use crate::error::PlacesError;

const TEXT_SEARCH_ENDPOINT: &str = "textsearch/json";
const FIND_PLACE_ENDPOINT: &str = "findplacefromtext/json";
const DETAILS_ENDPOINT: &str = "details/json";

/// Client for the Places web service.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_PLACES_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("gplace/0.1 (place-id-resolver)")
            .build()?;
        Self::with_client(client, api_key, base_url)
    }

    /// Wraps an existing `reqwest::Client`, so the resolver can share one
    /// connection pool between page fetches and API calls.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn with_client(client: Client, api_key: &str, base_url: &str) -> Result<Self, PlacesError> {
        // Endpoints are joined relative to the base, which only works when
        // the base path ends in exactly one slash.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(PlacesError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    /// Text search biased to `anchor`, returning every well-formed candidate
    /// in the order received.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiStatus`] if the API reports a failure status.
    /// - [`PlacesError::Http`] on network failure, timeout or non-2xx status.
    /// - [`PlacesError::Deserialize`] if the envelope does not match.
    pub async fn text_search(
        &self,
        query: &str,
        anchor: GeoPoint,
    ) -> Result<Vec<SearchCandidate>, PlacesError> {
        let location = anchor.to_string();
        let url = self.build_url(
            TEXT_SEARCH_ENDPOINT,
            &[("query", query), ("location", &location)],
        )?;
        let body = self.request_json(&url).await?;
        Self::check_status(&body)?;

        let envelope: ApiResponse<TextSearchResponse> =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("textsearch(query={query})"),
                source: e,
            })?;

        Ok(envelope
            .data
            .results
            .into_iter()
            .filter_map(|v| serde_json::from_value::<PlaceResult>(v).ok())
            .filter_map(PlaceResult::into_candidate)
            .collect())
    }

    /// Text search biased to `anchor`, reduced to the best-scoring candidate.
    ///
    /// `Ok(None)` only when the search returns no candidates; a poor best
    /// match is still returned.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::text_search`].
    pub async fn search_by_text_and_location(
        &self,
        query: &str,
        anchor: GeoPoint,
    ) -> Result<Option<PlaceId>, PlacesError> {
        let candidates = self.text_search(query, anchor).await?;
        tracing::debug!(query, anchor = %anchor, count = candidates.len(), "text search returned");
        Ok(select_best(&candidates, query, anchor).map(|best| best.candidate.place_id.clone()))
    }

    /// Find-place by free text with no location bias. Trusts the API's own
    /// ranking: only the first candidate is considered, and a first
    /// candidate without an identifier means no result.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::text_search`].
    pub async fn find_place_from_text(&self, input: &str) -> Result<Option<PlaceId>, PlacesError> {
        let url = self.build_url(
            FIND_PLACE_ENDPOINT,
            &[
                ("input", input),
                ("inputtype", "textquery"),
                ("fields", "place_id"),
            ],
        )?;
        let body = self.request_json(&url).await?;
        Self::check_status(&body)?;

        let envelope: ApiResponse<FindPlaceResponse> =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("findplacefromtext(input={input})"),
                source: e,
            })?;

        Ok(envelope
            .data
            .candidates
            .into_iter()
            .next()
            .and_then(|v| serde_json::from_value::<PlaceRef>(v).ok())
            .and_then(PlaceRef::into_place_id))
    }

    /// Looks up the place identifier for a legacy numeric `cid`.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::text_search`]; a `NOT_FOUND` or
    /// `INVALID_REQUEST` status arrives as [`PlacesError::ApiStatus`].
    pub async fn details_by_cid(&self, cid: &str) -> Result<Option<PlaceId>, PlacesError> {
        let url = self.build_url(DETAILS_ENDPOINT, &[("cid", cid), ("fields", "place_id")])?;
        let body = self.request_json(&url).await?;
        Self::check_status(&body)?;

        let envelope: ApiResponse<DetailsResponse> =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(cid={cid})"),
                source: e,
            })?;

        Ok(envelope.data.result.and_then(PlaceRef::into_place_id))
    }

    /// Builds the endpoint URL with `key` and the extra parameters
    /// percent-encoded via [`Url::query_pairs_mut`].
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body
    /// as JSON.
    ///
    /// Transport errors are stripped of their URL, which carries the API key.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: format!("{}{}", url.origin().ascii_serialization(), url.path()),
            source: e,
        })
    }

    fn check_status(body: &serde_json::Value) -> Result<(), PlacesError> {
        let status = body
            .get("status")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("MISSING_STATUS");
        if matches!(status, "OK" | "ZERO_RESULTS") {
            return Ok(());
        }
        let message = body
            .get("error_message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("no error message")
            .to_string();
        Err(PlacesError::ApiStatus {
            status: status.to_string(),
            message,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
