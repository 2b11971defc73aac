//! URL-shape stages of the pipeline.
//!
//! Each stage returns `None` both when the URL is not its shape and when its
//! lookups fail; failures are logged here and go no further.

use gplace_core::{GeoPoint, PlaceId};

use super::{PlaceIdResolver, StageFuture};
use crate::blob::decode_search_blob;
use crate::classify::{
    alternate_id, embedded_coordinates, generic_search_query, place_segment_name,
    search_intent_blob,
};
use crate::page::page_coordinates;

pub(super) fn search_intent_stage<'a>(r: &'a PlaceIdResolver, url: &'a str) -> StageFuture<'a> {
    Box::pin(r.resolve_search_intent(url))
}

pub(super) fn generic_search_stage<'a>(r: &'a PlaceIdResolver, url: &'a str) -> StageFuture<'a> {
    Box::pin(r.resolve_generic_search(url))
}

pub(super) fn alternate_id_stage<'a>(r: &'a PlaceIdResolver, url: &'a str) -> StageFuture<'a> {
    Box::pin(r.resolve_alternate_id(url))
}

pub(super) fn generic_place_stage<'a>(r: &'a PlaceIdResolver, url: &'a str) -> StageFuture<'a> {
    Box::pin(r.resolve_generic_place(url))
}

impl PlaceIdResolver {
    /// `pvq`/`lqi` URLs: decode the blob to a query, then search anchored by
    /// the page's coordinates, or by text alone when the page has none.
    async fn resolve_search_intent(&self, url: &str) -> Option<PlaceId> {
        let blob = search_intent_blob(url)?;
        let Some(query) = decode_search_blob(&blob) else {
            tracing::debug!(url, "no query recoverable from search blob");
            return None;
        };
        tracing::debug!(query = %query, "decoded search intent query");

        match page_coordinates(&self.http, url, &self.user_agent).await {
            Some(anchor) => {
                tracing::debug!(anchor = %anchor, "page coordinates found");
                self.search_near(&query, anchor).await
            }
            None => self.search_text(&query).await,
        }
    }

    async fn resolve_generic_search(&self, url: &str) -> Option<PlaceId> {
        let query = generic_search_query(url)?;
        tracing::debug!(query = %query, "generic search query");
        self.search_text(&query).await
    }

    async fn resolve_alternate_id(&self, url: &str) -> Option<PlaceId> {
        let cid = alternate_id(url)?;
        tracing::debug!(cid = %cid, "looking up alternate identifier");
        match self.places.details_by_cid(&cid).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(cid = %cid, error = %e, "cid details lookup failed");
                None
            }
        }
    }

    /// `/place/<name>` URLs: anchored search when the path embeds
    /// coordinates, with a text-only fallback for both "no coordinates" and
    /// "anchored search found nothing".
    async fn resolve_generic_place(&self, url: &str) -> Option<PlaceId> {
        let name = place_segment_name(url)?;
        tracing::debug!(name = %name, "place segment");

        if let Some(anchor) = embedded_coordinates(url) {
            tracing::debug!(anchor = %anchor, "embedded path coordinates found");
            if let Some(id) = self.search_near(&name, anchor).await {
                return Some(id);
            }
        }

        self.search_text(&name).await
    }

    async fn search_near(&self, query: &str, anchor: GeoPoint) -> Option<PlaceId> {
        match self.places.search_by_text_and_location(query, anchor).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(query, error = %e, "text+location search failed");
                None
            }
        }
    }

    async fn search_text(&self, query: &str) -> Option<PlaceId> {
        match self.places.find_place_from_text(query).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(query, error = %e, "find place from text failed");
                None
            }
        }
    }
}
