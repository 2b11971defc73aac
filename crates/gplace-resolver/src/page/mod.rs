//! Page-level signals: short-link expansion and coordinate mining from
//! rendered Maps pages.

mod coords;
mod fetch;

pub use coords::extract_coordinates;
pub(crate) use fetch::expand_short_link;

use gplace_core::GeoPoint;

/// Fetch `url` and mine the body for a coordinate pair.
///
/// Fetch failures are logged and reported as `None`.
pub(crate) async fn page_coordinates(
    client: &reqwest::Client,
    url: &str,
    user_agent: &str,
) -> Option<GeoPoint> {
    match fetch::fetch_page_text(client, url, user_agent).await {
        Ok(body) => {
            let point = extract_coordinates(&body);
            tracing::debug!(url, found = point.is_some(), "mined page for coordinates");
            point
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "page fetch failed; no coordinates");
            None
        }
    }
}
