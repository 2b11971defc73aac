//! Literal `place_id` extraction from the raw URL string.

use std::sync::LazyLock;

use gplace_core::PlaceId;
use regex::Regex;

static PLACE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)place_id[=:]([^&]+)").expect("valid place_id regex"));

/// Finds a `place_id=` / `place_id:` key anywhere in `url` and returns its
/// value up to the next `&`, exactly as written.
///
/// Scans the raw string rather than the parsed query: the key also appears
/// inside `data=` path tokens and with inconsistent percent-encoding, so no
/// decoding is applied to the captured value.
#[must_use]
pub fn extract_direct_place_id(url: &str) -> Option<PlaceId> {
    let cap = PLACE_ID_RE.captures(url)?;
    PlaceId::new(cap.get(1)?.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_query_place_id() {
        let url = "https://www.google.com/maps/search/?api=1&query=Centennial+Park&query_place_id=ChIJ3S-JXmauEmsRunMqck0Kd3s";
        assert_eq!(
            extract_direct_place_id(url).unwrap().as_str(),
            "ChIJ3S-JXmauEmsRunMqck0Kd3s"
        );
    }

    #[test]
    fn stops_at_next_ampersand() {
        let url = "https://maps.google.com/?place_id=ChIJabc&hl=en";
        assert_eq!(extract_direct_place_id(url).unwrap().as_str(), "ChIJabc");
    }

    #[test]
    fn accepts_colon_delimiter_and_any_case() {
        let url = "https://www.google.com/maps/dir/?destination=Place_ID:ChIJxyz";
        assert_eq!(extract_direct_place_id(url).unwrap().as_str(), "ChIJxyz");
    }

    #[test]
    fn value_is_not_decoded() {
        let url = "https://www.google.com/maps?place_id=ChIJ%2Dabc";
        assert_eq!(extract_direct_place_id(url).unwrap().as_str(), "ChIJ%2Dabc");
    }

    #[test]
    fn absent_or_empty_is_none() {
        assert!(extract_direct_place_id("https://www.google.com/maps/place/Foo").is_none());
        assert!(extract_direct_place_id("https://www.google.com/maps?place_id=&x=1").is_none());
    }
}
