//! Deterministic candidate selection for text+location searches.
//!
//! ```text
//! name score     = 1000 exact (case-insensitive) | 100 containment either way | 0
//! distance (m)   = euclidean degrees * 111 000
//! distance score = max(0, 50 - distance / 10)
//! total          = name score + distance score
//! ```
//!
//! The highest total wins, earliest candidate on ties. A weak or distant best
//! match is still returned; it is only reported through logging.

use gplace_core::GeoPoint;

use super::types::SearchCandidate;

pub const EXACT_NAME_SCORE: f64 = 1000.0;
pub const PARTIAL_NAME_SCORE: f64 = 100.0;
pub const MAX_DISTANCE_SCORE: f64 = 50.0;

/// Flat-earth degree length; good enough at the few-hundred-metre scale scored here.
const METERS_PER_DEGREE: f64 = 111_000.0;
const METERS_PER_DISTANCE_POINT: f64 = 10.0;

const CLOSE_ENOUGH_METERS: f64 = 100.0;
const LOW_CONFIDENCE_SCORE: f64 = 50.0;

#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a SearchCandidate,
    pub name_score: f64,
    pub distance_meters: f64,
    pub distance_score: f64,
    pub score: f64,
}

impl ScoredCandidate<'_> {
    #[must_use]
    pub fn is_exact_name_match(&self) -> bool {
        self.name_score >= EXACT_NAME_SCORE
    }
}

#[must_use]
pub fn score_candidate<'a>(
    candidate: &'a SearchCandidate,
    query: &str,
    anchor: GeoPoint,
) -> ScoredCandidate<'a> {
    let name = candidate.name.to_lowercase();
    let query = query.to_lowercase();
    let name_score = if name == query {
        EXACT_NAME_SCORE
    } else if name.contains(&query) || query.contains(&name) {
        PARTIAL_NAME_SCORE
    } else {
        0.0
    };

    let distance_meters = distance_meters(candidate.location, anchor);
    let distance_score =
        (MAX_DISTANCE_SCORE - distance_meters / METERS_PER_DISTANCE_POINT).max(0.0);

    ScoredCandidate {
        candidate,
        name_score,
        distance_meters,
        distance_score,
        score: name_score + distance_score,
    }
}

/// Pick the best-scoring candidate. `None` only for an empty slice.
#[must_use]
pub fn select_best<'a>(
    candidates: &'a [SearchCandidate],
    query: &str,
    anchor: GeoPoint,
) -> Option<ScoredCandidate<'a>> {
    let mut best: Option<ScoredCandidate<'a>> = None;

    for candidate in candidates {
        let scored = score_candidate(candidate, query, anchor);
        tracing::debug!(
            name = %candidate.name,
            place_id = %candidate.place_id,
            distance_m = scored.distance_meters.round(),
            name_score = scored.name_score,
            distance_score = scored.distance_score,
            score = scored.score,
            "scored candidate"
        );
        if best.is_none_or(|b| scored.score > b.score) {
            best = Some(scored);
        }
    }

    let best = best?;
    tracing::debug!(
        name = %best.candidate.name,
        score = best.score,
        "selected candidate"
    );

    if !best.is_exact_name_match() && best.distance_meters >= CLOSE_ENOUGH_METERS {
        tracing::warn!(
            name = %best.candidate.name,
            distance_m = best.distance_meters.round(),
            score = best.score,
            "selected place is far from the anchor and its name does not match exactly"
        );
    }
    if best.score < LOW_CONFIDENCE_SCORE {
        tracing::warn!(score = best.score, "low confidence match");
    }

    Some(best)
}

fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = a.lat() - b.lat();
    let d_lng = a.lng() - b.lng();
    d_lat.hypot(d_lng) * METERS_PER_DEGREE
}
