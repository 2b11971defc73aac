//! Resolve heterogeneous Google Maps URLs to canonical place identifiers.
//!
//! ```no_run
//! # async fn demo() {
//! use gplace_resolver::{resolve_place_id, ResolutionOptions};
//!
//! let options = ResolutionOptions::new("YOUR_API_KEY");
//! let id = resolve_place_id("https://maps.app.goo.gl/abc123", &options).await;
//! # }
//! ```

pub mod blob;
pub mod classify;
pub mod direct;
pub mod error;
pub mod page;
pub mod places;
mod resolver;

pub use blob::decode_search_blob;
pub use direct::extract_direct_place_id;
pub use error::{FetchError, PlacesError, ResolveError};
pub use gplace_core::{GeoPoint, PlaceId, ResolutionOptions, ResolverConfig};
pub use page::extract_coordinates;
pub use places::{PlacesClient, ScoredCandidate, SearchCandidate};
pub use resolver::{resolve_place_id, PlaceIdResolver};
