//! Subgraph access: documents, raw records and the query client
//!
//! The dashboard runs three independent queries against two endpoints:
//!
//! | Query | Endpoint | Document |
//! |-------|----------|----------|
//! | [`QueryKind::Reserves`] | lending | [`documents::RESERVES`] |
//! | [`QueryKind::Activity`] | lending | [`documents::ACTIVITY`] |
//! | [`QueryKind::Governance`] | governance | [`documents::PROPOSALS`] |
//!
//! [`SubgraphClient`] bounds each query with the configured timeout and
//! decodes the `data` object into the raw record types of [`records`].

use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tracing::Instrument;
use url::Url;

use crate::config::DashboardConfig;
use crate::errors::FetchError;
use crate::tracing::spans;

pub mod documents;
pub mod records;
mod transport;

pub use records::{ActivityData, ProposalsData, ReservesData};
pub use transport::{GraphQlTransport, HttpTransport};

/// The three dashboard queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    /// Reserve metrics from the lending subgraph
    Reserves,
    /// Protocol activity and reward users from the lending subgraph
    Activity,
    /// Proposals from the governance subgraph
    Governance,
}

impl QueryKind {
    /// All queries, in dashboard order
    pub const ALL: [QueryKind; 3] = [QueryKind::Reserves, QueryKind::Activity, QueryKind::Governance];

    /// Get the query name
    pub const fn name(&self) -> &'static str {
        match self {
            QueryKind::Reserves => "reserves",
            QueryKind::Activity => "activity",
            QueryKind::Governance => "governance",
        }
    }

    /// The GraphQL document for this query
    pub const fn document(&self) -> &'static str {
        match self {
            QueryKind::Reserves => documents::RESERVES,
            QueryKind::Activity => documents::ACTIVITY,
            QueryKind::Governance => documents::PROPOSALS,
        }
    }
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed, time-bounded access to the two subgraphs
#[derive(Clone)]
pub struct SubgraphClient {
    transport: Arc<dyn GraphQlTransport>,
    lending_endpoint: Url,
    governance_endpoint: Url,
    timeout: Duration,
}

impl std::fmt::Debug for SubgraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubgraphClient")
            .field("lending_endpoint", &self.lending_endpoint.as_str())
            .field("governance_endpoint", &self.governance_endpoint.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl SubgraphClient {
    /// Create a client over any transport
    pub fn new(transport: Arc<dyn GraphQlTransport>, config: &DashboardConfig) -> Self {
        Self {
            transport,
            lending_endpoint: config.lending_endpoint.clone(),
            governance_endpoint: config.governance_endpoint.clone(),
            timeout: config.request_timeout,
        }
    }

    /// The endpoint a query is sent to
    pub fn endpoint(&self, query: QueryKind) -> &Url {
        match query {
            QueryKind::Reserves | QueryKind::Activity => &self.lending_endpoint,
            QueryKind::Governance => &self.governance_endpoint,
        }
    }

    /// Fetch reserve metrics
    pub async fn reserves(&self) -> Result<ReservesData, FetchError> {
        self.query(QueryKind::Reserves).await
    }

    /// Fetch protocol activity and reward users
    pub async fn activity(&self) -> Result<ActivityData, FetchError> {
        self.query(QueryKind::Activity).await
    }

    /// Fetch governance proposals
    pub async fn proposals(&self) -> Result<ProposalsData, FetchError> {
        self.query(QueryKind::Governance).await
    }

    async fn query<T: DeserializeOwned>(&self, query: QueryKind) -> Result<T, FetchError> {
        let endpoint = self.endpoint(query);

        async {
            let data = tokio::time::timeout(
                self.timeout,
                self.transport.execute(endpoint, query.document()),
            )
            .await
            .map_err(|_| FetchError::Timeout {
                query: query.name(),
                timeout: self.timeout,
            })??;

            serde_json::from_value(data).map_err(|source| FetchError::Decode {
                query: query.name(),
                source,
            })
        }
        .instrument(spans::fetch_query(query, endpoint))
        .await
    }
}
