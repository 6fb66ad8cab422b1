//! Span creation helpers for aavescan operations.
//!
//! Telemetry is kept apart from business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! async {
//!     // Business logic here
//! }
//! .instrument(spans::fetch_query(query, endpoint))
//! .await
//! ```

use tracing::Span;
use url::Url;

use crate::subgraph::QueryKind;

/// Create span for loading a full dashboard snapshot.
///
/// Parent: None (root span for this operation)
/// Children: fetch_query spans (one per query), normalize_records spans
#[inline]
pub(crate) fn load_dashboard() -> Span {
    tracing::info_span!("aavescan.load_dashboard")
}

/// Create span for a single subgraph query.
///
/// Parent: load_dashboard span
/// Children: HTTP request events from the transport
#[inline]
pub(crate) fn fetch_query(query: QueryKind, endpoint: &Url) -> Span {
    tracing::debug_span!(
        "aavescan.fetch_query",
        query = query.name(),
        endpoint = %endpoint,
    )
}

/// Create span for normalizing one collection of records.
///
/// Parent: load_dashboard span
/// Children: None (skipped records are logged as events)
#[inline]
pub(crate) fn normalize_records(collection: &'static str, count: usize) -> Span {
    tracing::debug_span!(
        "aavescan.normalize_records",
        collection = collection,
        count = count,
    )
}
