//! Coordinate mining from page text.

use std::sync::LazyLock;

use gplace_core::GeoPoint;
use regex::Regex;

/// Static-map image URLs carry `center=<lat>%2C<lng>`, which is unambiguous
/// about axis order.
static STATIC_MAP_CENTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"center=(-?\d+\.\d+)%2[Cc](-?\d+\.\d+)").expect("valid static map regex")
});
static NUMERIC_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-?\d+\.\d+),\s*(-?\d+\.\d+)").expect("valid numeric pair regex")
});

/// Find a coordinate pair in `text`.
///
/// The static-map `center=` pattern wins outright when present. Otherwise the
/// first `<float>,<float>` pair that fits as `(lat, lng)`, or failing that as
/// `(lng, lat)`, is returned. Later matches are never considered once one fits.
#[must_use]
pub fn extract_coordinates(text: &str) -> Option<GeoPoint> {
    let center = STATIC_MAP_CENTER_RE.captures_iter(text).find_map(|cap| {
        let lat = cap.get(1)?.as_str().parse::<f64>().ok()?;
        let lng = cap.get(2)?.as_str().parse::<f64>().ok()?;
        GeoPoint::new(lat, lng)
    });
    if center.is_some() {
        return center;
    }

    NUMERIC_PAIR_RE.captures_iter(text).find_map(|cap| {
        let first = cap.get(1)?.as_str().parse::<f64>().ok()?;
        let second = cap.get(2)?.as_str().parse::<f64>().ok()?;
        orient(first, second)
    })
}

fn orient(first: f64, second: f64) -> Option<GeoPoint> {
    if first.abs() <= 90.0 && second.abs() <= 180.0 {
        return GeoPoint::new(first, second);
    }
    if second.abs() <= 90.0 && first.abs() <= 180.0 {
        return GeoPoint::new(second, first);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point(point: Option<GeoPoint>, lat: f64, lng: f64) {
        let point = point.expect("expected coordinates");
        assert!((point.lat() - lat).abs() < 1e-9, "lat {} != {lat}", point.lat());
        assert!((point.lng() - lng).abs() < 1e-9, "lng {} != {lng}", point.lng());
    }

    #[test]
    fn static_map_center_wins_over_earlier_pairs() {
        let html = r#"
            <script>var version = [1.5, 2.25];</script>
            <meta content="https://maps.google.com/maps/api/staticmap?center=40.7484%2C-73.9857&amp;zoom=15">
        "#;
        assert_point(extract_coordinates(html), 40.7484, -73.9857);
    }

    #[test]
    fn lowercase_encoded_comma_is_accepted() {
        assert_point(
            extract_coordinates("staticmap?center=-33.86%2c151.21&size=256"),
            -33.86,
            151.21,
        );
    }

    #[test]
    fn first_in_range_pair_is_lat_lng() {
        let text = "window.APP_INIT=[[[3890.1,12.5],[-33.8567844,151.2152967]]]";
        // "3890.1,12.5" fails both orientations; the next pair fits.
        assert_point(extract_coordinates(text), -33.856_784_4, 151.215_296_7);
    }

    #[test]
    fn pair_is_swapped_when_only_reverse_fits() {
        assert_point(extract_coordinates("[151.2152967, -33.8567844]"), -33.856_784_4, 151.215_296_7);
    }

    #[test]
    fn pair_outside_both_orientations_is_rejected() {
        assert!(extract_coordinates("200.0,50.0").is_none());
    }

    #[test]
    fn first_fitting_match_wins_without_scoring() {
        assert_point(extract_coordinates("1.5,2.5 then 40.7,-73.9"), 1.5, 2.5);
    }

    #[test]
    fn integers_are_not_coordinates() {
        assert!(extract_coordinates("width=640,height=480").is_none());
    }
}
