//! Error types for subgraph queries.
//!
//! Each of the three dashboard queries resolves independently. A
//! [`FetchError`] is scoped to exactly one of them and is caught at the query
//! boundary, so it never blanks the sections fed by the other queries.

use std::time::Duration;

/// Errors that can occur while executing a GraphQL query against a subgraph.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("Transport failure while querying {endpoint}")]
    Transport {
        /// The endpoint that was queried
        endpoint: String,
        /// The underlying client error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The endpoint answered with a non-success HTTP status.
    #[error("{endpoint} responded with HTTP {status}")]
    HttpStatus {
        /// The endpoint that was queried
        endpoint: String,
        /// The HTTP status code
        status: u16,
    },

    /// The endpoint returned a GraphQL `errors` array.
    #[error("GraphQL errors from {endpoint}: {}", .messages.join("; "))]
    GraphQl {
        /// The endpoint that was queried
        endpoint: String,
        /// Messages reported by the server
        messages: Vec<String>,
    },

    /// The response carried neither `data` nor `errors`.
    #[error("Response from {endpoint} has no data")]
    MissingData {
        /// The endpoint that was queried
        endpoint: String,
    },

    /// The `data` object did not match the expected record shapes.
    #[error("Failed to decode {query} response")]
    Decode {
        /// Name of the query whose response failed to decode
        query: &'static str,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// The query did not complete within the configured timeout.
    #[error("{query} query timed out after {timeout:?}")]
    Timeout {
        /// Name of the query that timed out
        query: &'static str,
        /// The timeout that elapsed
        timeout: Duration,
    },
}

impl FetchError {
    /// Helper to create a `Transport` error from any error type.
    pub fn transport(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        FetchError::Transport {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }
}
