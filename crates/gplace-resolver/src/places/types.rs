//! Places web service response types.
//!
//! Every response is wrapped in a `{"status": "OK", ...}` envelope;
//! [`ApiResponse`] captures that pattern generically.

use gplace_core::{GeoPoint, PlaceId};
use serde::Deserialize;

/// Top-level envelope. `status` is `"OK"`, `"ZERO_RESULTS"`, or an error code
/// such as `"REQUEST_DENIED"` accompanied by `error_message`.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

// ---------------------------------------------------------------------------
// textsearch
// ---------------------------------------------------------------------------

/// Entries stay as raw JSON so one malformed result cannot sink the rest.
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    pub name: String,
    pub place_id: String,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl PlaceResult {
    pub(crate) fn into_candidate(self) -> Option<SearchCandidate> {
        Some(SearchCandidate {
            name: self.name,
            place_id: PlaceId::new(self.place_id)?,
            location: GeoPoint::new(self.geometry.location.lat, self.geometry.location.lng)?,
        })
    }
}

// ---------------------------------------------------------------------------
// findplacefromtext / details
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct FindPlaceResponse {
    #[serde(default)]
    pub candidates: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    #[serde(default)]
    pub result: Option<PlaceRef>,
}

/// A result reduced to its identifier (`fields=place_id`).
#[derive(Debug, Deserialize)]
pub struct PlaceRef {
    #[serde(default)]
    pub place_id: Option<String>,
}

impl PlaceRef {
    pub(crate) fn into_place_id(self) -> Option<PlaceId> {
        self.place_id.and_then(PlaceId::new)
    }
}

/// One text-search hit, as consumed by the scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCandidate {
    pub name: String,
    pub place_id: PlaceId,
    pub location: GeoPoint,
}
