//! Dashboard orchestration
//!
//! [`Dashboard::load`] runs the three subgraph queries concurrently and
//! assembles a [`DashboardSnapshot`]. Each query owns one slice of the
//! snapshot; a query that fails or times out leaves its slice empty, records a
//! [`QueryFailure`] and never affects the other two.

use std::sync::Arc;

use futures::future::join3;
use serde::Serialize;
use tracing::{error, info, Instrument};

use crate::config::DashboardConfig;
use crate::errors::FetchError;
use crate::normalize::{
    market_overview, normalize_activity, normalize_proposals, ActivityFeed, MarketOverview,
    Proposal,
};
use crate::subgraph::{GraphQlTransport, HttpTransport, QueryKind, SubgraphClient};
use crate::tracing::spans;

/// A query that produced no data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryFailure {
    pub query: QueryKind,
    pub message: String,
}

impl QueryFailure {
    pub fn new(query: QueryKind, error: &FetchError) -> Self {
        Self {
            query,
            message: error.to_string(),
        }
    }
}

/// Everything a dashboard shows, one slice per query
///
/// Snapshots are values: each `with_*` method consumes the snapshot and
/// returns a new one with a single slice replaced.
///
/// # Examples
///
/// ```
/// use aavescan::dashboard::DashboardSnapshot;
/// use aavescan::normalize::MarketOverview;
///
/// let empty = DashboardSnapshot::default();
/// let loaded = empty.clone().with_markets(MarketOverview::default());
///
/// assert!(empty.markets.is_none());
/// assert!(loaded.markets.is_some());
/// assert!(loaded.activity.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub markets: Option<MarketOverview>,
    pub activity: Option<ActivityFeed>,
    pub governance: Option<Vec<Proposal>>,
    pub failures: Vec<QueryFailure>,
}

impl DashboardSnapshot {
    pub fn with_markets(self, markets: MarketOverview) -> Self {
        Self {
            markets: Some(markets),
            ..self
        }
    }

    pub fn with_activity(self, activity: ActivityFeed) -> Self {
        Self {
            activity: Some(activity),
            ..self
        }
    }

    pub fn with_governance(self, governance: Vec<Proposal>) -> Self {
        Self {
            governance: Some(governance),
            ..self
        }
    }

    pub fn with_failure(self, failure: QueryFailure) -> Self {
        let mut failures = self.failures;
        failures.push(failure);
        Self { failures, ..self }
    }

    /// Whether `query` failed during the load that built this snapshot
    pub fn has_failed(&self, query: QueryKind) -> bool {
        self.failures.iter().any(|failure| failure.query == query)
    }

    /// True when every query succeeded
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Loads dashboard snapshots from the two subgraphs
///
/// # Example
///
/// ```rust,no_run
/// use aavescan::{Dashboard, DashboardConfig};
///
/// # async fn example() -> Result<(), aavescan::FetchError> {
/// let dashboard = Dashboard::http(&DashboardConfig::default())?;
/// let snapshot = dashboard.load().await;
/// println!("{} queries failed", snapshot.failures.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    client: SubgraphClient,
}

impl Dashboard {
    /// Create a dashboard over any transport
    pub fn new(transport: Arc<dyn GraphQlTransport>, config: &DashboardConfig) -> Self {
        Self {
            client: SubgraphClient::new(transport, config),
        }
    }

    /// Create a dashboard that talks HTTP
    pub fn http(config: &DashboardConfig) -> Result<Self, FetchError> {
        let transport = HttpTransport::new(config.request_timeout)?;
        Ok(Self::new(Arc::new(transport), config))
    }

    /// Run all three queries concurrently and build a snapshot
    ///
    /// Never fails: query errors end up in [`DashboardSnapshot::failures`].
    pub async fn load(&self) -> DashboardSnapshot {
        async {
            let (reserves, activity, proposals) = join3(
                self.client.reserves(),
                self.client.activity(),
                self.client.proposals(),
            )
            .await;

            let mut snapshot = DashboardSnapshot::default();

            snapshot = match reserves {
                Ok(data) => snapshot.with_markets(market_overview(&data.reserves)),
                Err(e) => failed(snapshot, QueryKind::Reserves, &e),
            };

            snapshot = match activity {
                Ok(data) => snapshot.with_activity(normalize_activity(&data)),
                Err(e) => failed(snapshot, QueryKind::Activity, &e),
            };

            snapshot = match proposals {
                Ok(data) => snapshot.with_governance(normalize_proposals(&data.proposals)),
                Err(e) => failed(snapshot, QueryKind::Governance, &e),
            };

            info!(
                failed_queries = snapshot.failures.len(),
                "Dashboard snapshot loaded"
            );
            snapshot
        }
        .instrument(spans::load_dashboard())
        .await
    }
}

fn failed(snapshot: DashboardSnapshot, query: QueryKind, e: &FetchError) -> DashboardSnapshot {
    error!(query = query.name(), error = %e, "Query failed");
    snapshot.with_failure(QueryFailure::new(query, e))
}
