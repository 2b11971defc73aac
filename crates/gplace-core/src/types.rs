//! Domain types shared by every stage of the resolution pipeline.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// Always within `[-90, 90]` x `[-180, 180]`; use [`GeoPoint::new`] to build one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = String;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng)
            .ok_or_else(|| format!("coordinate out of range: {},{}", raw.lat, raw.lng))
    }
}

impl GeoPoint {
    /// Returns `None` when either coordinate is non-finite or out of range.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if lat.abs() > 90.0 || lng.abs() > 180.0 {
            return None;
        }
        Some(Self { lat, lng })
    }

    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Opaque place identifier issued by the mapping service. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(String);

impl PlaceId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Caller-supplied options, read-only for the lifetime of one resolution.
#[derive(Clone)]
pub struct ResolutionOptions {
    pub api_key: String,
}

impl ResolutionOptions {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for ResolutionOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionOptions")
            .field("api_key", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_point_accepts_bounds() {
        assert!(GeoPoint::new(90.0, 180.0).is_some());
        assert!(GeoPoint::new(-90.0, -180.0).is_some());
    }

    #[test]
    fn geo_point_rejects_out_of_range_and_nan() {
        assert!(GeoPoint::new(90.5, 0.0).is_none());
        assert!(GeoPoint::new(0.0, 180.1).is_none());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_none());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn geo_point_display_is_lat_comma_lng() {
        let p = GeoPoint::new(-33.867, 151.206).unwrap();
        assert_eq!(p.to_string(), "-33.867,151.206");
    }

    #[test]
    fn geo_point_deserialization_enforces_range() {
        let p: GeoPoint = serde_json::from_str(r#"{"lat": 40.7306, "lng": -73.9866}"#).unwrap();
        assert_eq!(p, GeoPoint::new(40.7306, -73.9866).unwrap());

        let err = serde_json::from_str::<GeoPoint>(r#"{"lat": 200.0, "lng": 50.0}"#)
            .expect_err("latitude 200 is out of range");
        assert!(err.to_string().contains("out of range"), "got: {err}");
    }

    #[test]
    fn place_id_rejects_empty() {
        assert!(PlaceId::new("").is_none());
        assert_eq!(PlaceId::new("ChIJabc").unwrap().as_str(), "ChIJabc");
    }

    #[test]
    fn place_id_serializes_as_plain_string() {
        let id = PlaceId::new("ChIJabc").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ChIJabc\"");
    }

    #[test]
    fn options_debug_redacts_key() {
        let opts = ResolutionOptions::new("secret");
        assert!(!format!("{opts:?}").contains("secret"));
    }
}
