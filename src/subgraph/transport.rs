// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! GraphQL transport
//!
//! [`GraphQlTransport`] is the seam between the dashboard and the network:
//! given an endpoint and a document it returns the response's `data` object.
//! [`HttpTransport`] is the production implementation over `reqwest`; tests
//! substitute their own.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::errors::FetchError;

/// Executes read-only GraphQL documents
///
/// The trait is object-safe, so the dashboard holds it as
/// `Arc<dyn GraphQlTransport>`.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    /// Run `document` against `endpoint` and return the `data` object
    async fn execute(&self, endpoint: &Url, document: &str) -> Result<Value, FetchError>;
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorMessage>>,
}

/// Extract `data` from a GraphQL response body
///
/// Any entry in `errors` fails the whole query, even when partial data came
/// back alongside it.
pub(crate) fn extract_data(endpoint: &Url, body: Value) -> Result<Value, FetchError> {
    let response: GraphQlResponse =
        serde_json::from_value(body).map_err(|source| FetchError::Decode {
            query: "graphql envelope",
            source,
        })?;

    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        return Err(FetchError::GraphQl {
            endpoint: endpoint.to_string(),
            messages: errors.into_iter().map(|e| e.message).collect(),
        });
    }

    match response.data {
        Some(Value::Null) | None => Err(FetchError::MissingData {
            endpoint: endpoint.to_string(),
        }),
        Some(data) => Ok(data),
    }
}

/// GraphQL over HTTP POST using `reqwest`
///
/// # Example
///
/// ```rust,no_run
/// use aavescan::{GraphQlTransport, HttpTransport};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), aavescan::FetchError> {
/// let transport = HttpTransport::new(Duration::from_secs(30))?;
/// let endpoint: url::Url = "https://api.thegraph.com/subgraphs/name/aave/protocol-v2".parse().unwrap();
/// let data = transport.execute(&endpoint, "{ reserves { id } }").await?;
/// println!("{data}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::transport("http client", e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl GraphQlTransport for HttpTransport {
    async fn execute(&self, endpoint: &Url, document: &str) -> Result<Value, FetchError> {
        debug!(endpoint = %endpoint, "Sending GraphQL query");

        let response = self
            .client
            .post(endpoint.clone())
            .json(&GraphQlRequest { query: document })
            .send()
            .await
            .map_err(|e| FetchError::transport(endpoint.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::transport(endpoint.as_str(), e))?;
        trace!(endpoint = %endpoint, "Received GraphQL response");

        extract_data(endpoint, body)
    }
}
