//! Places web service access: text+location search with candidate scoring,
//! find-place by text, and details by legacy `cid`.

mod client;
pub mod score;
pub mod types;

pub use client::PlacesClient;
pub use score::{select_best, ScoredCandidate};
pub use types::SearchCandidate;
