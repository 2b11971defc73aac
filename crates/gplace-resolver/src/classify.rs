//! URL shape classification.
//!
//! Every function here is a pure predicate or extractor over a URL string.
//! The predicates are independent: one URL may match several, and the
//! resolver chain decides precedence. A URL that cannot be parsed is
//! classified `false`/`None` by every function.

use std::borrow::Cow;
use std::sync::LazyLock;

use gplace_core::GeoPoint;
use percent_encoding::percent_decode_str;
use regex::Regex;
use reqwest::Url;

static PLACE_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/place/([^/?]+)").expect("valid place segment regex"));
static EMBEDDED_COORDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!3d(-?\d+\.\d+)!4d(-?\d+\.\d+)").expect("valid embedded coords regex")
});

const SHORT_LINK_MARKERS: [&str; 2] = ["maps.app.goo.gl", "goo.gl/maps"];
const SEARCH_BLOB_PARAMS: [&str; 2] = ["pvq", "lqi"];
const GENERIC_QUERY_PARAMS: [&str; 2] = ["q", "query"];
const ALTERNATE_ID_PARAM: &str = "cid";

/// Short links are matched anywhere in the raw string, so scheme-less and
/// wrapped forms (`goo.gl/maps/...` inside another URL) are recognised too.
#[must_use]
pub fn is_short_link(url: &str) -> bool {
    SHORT_LINK_MARKERS.iter().any(|m| url.contains(m))
}

#[must_use]
pub fn is_search_intent(url: &str) -> bool {
    search_intent_blob(url).is_some()
}

/// The encoded search blob, preferring `pvq` over `lqi`.
///
/// Query values are form-decoded, which turns a literal `+` into a space;
/// spaces never occur in base64, so they are mapped back to `+` here.
#[must_use]
pub fn search_intent_blob(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    SEARCH_BLOB_PARAMS
        .iter()
        .find_map(|name| first_param(&parsed, name))
        .map(|blob| blob.replace(' ', "+"))
}

#[must_use]
pub fn is_generic_search(url: &str) -> bool {
    generic_search_query(url).is_some()
}

/// The text query of a search-action URL (`/search?q=...`,
/// `/maps/search/?query=...`). `None` for place-intent paths.
#[must_use]
pub fn generic_search_query(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let mut segments = parsed.path_segments()?;
    let is_search_path = segments.any(|s| s == "search");
    if !is_search_path || has_place_segment(url) {
        return None;
    }
    GENERIC_QUERY_PARAMS
        .iter()
        .find_map(|name| first_param(&parsed, name))
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
}

#[must_use]
pub fn has_alternate_id(url: &str) -> bool {
    alternate_id(url).is_some()
}

/// The legacy numeric `cid` identifier.
#[must_use]
pub fn alternate_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    first_param(&parsed, ALTERNATE_ID_PARAM)
}

#[must_use]
pub fn has_place_segment(url: &str) -> bool {
    raw_place_segment(url).is_some()
}

/// The human-readable place name from a `/place/<name>` path segment, with
/// `+` turned back into spaces and percent-escapes decoded.
#[must_use]
pub fn place_segment_name(url: &str) -> Option<String> {
    let raw = raw_place_segment(url)?;
    let spaced = raw.replace('+', " ");
    let decoded: Cow<'_, str> = percent_decode_str(&spaced).decode_utf8_lossy();
    let name = decoded.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// The `!3d<lat>!4d<lng>` pair Maps embeds in the `data=` path token.
/// An out-of-range pair counts as absent.
#[must_use]
pub fn embedded_coordinates(url: &str) -> Option<GeoPoint> {
    let cap = EMBEDDED_COORDS_RE.captures(url)?;
    let lat = cap.get(1)?.as_str().parse::<f64>().ok()?;
    let lng = cap.get(2)?.as_str().parse::<f64>().ok()?;
    GeoPoint::new(lat, lng)
}

fn raw_place_segment(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let cap = PLACE_SEGMENT_RE.captures(parsed.path())?;
    cap.get(1).map(|m| m.as_str().to_string())
}

fn first_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}
