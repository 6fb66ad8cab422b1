// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # aavescan
//!
//! Read-only dashboard for the Aave V2 lending protocol.
//!
//! Three GraphQL queries are issued concurrently against two subgraphs:
//! reserve metrics and protocol activity from the lending subgraph, proposals
//! from the governance subgraph. Raw records are normalized into display
//! values (token amounts scaled by their decimals, ray rates as percentages,
//! USD valuations through the oracle price) and assembled into a
//! [`DashboardSnapshot`].
//!
//! ```rust,no_run
//! use aavescan::{render, Dashboard, DashboardConfig};
//!
//! # async fn example() -> Result<(), aavescan::FetchError> {
//! let dashboard = Dashboard::http(&DashboardConfig::default())?;
//! let snapshot = dashboard.load().await;
//! println!("{}", render::text(&snapshot));
//! # Ok(())
//! # }
//! ```
//!
//! Failures are contained: a malformed record is skipped and logged, a failed
//! query leaves only its own slice of the snapshot empty.

pub mod bootstrap;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod links;
pub mod normalize;
pub mod render;
pub mod subgraph;
pub mod timestamp;
pub(crate) mod tracing;
pub mod types;

pub use config::{DashboardConfig, DashboardConfigBuilder, OutputFormat};
pub use dashboard::{Dashboard, DashboardSnapshot, QueryFailure};
pub use errors::{AavescanError, ConfigError, FetchError, NormalizationError};
pub use links::extract_tx_hash;
pub use normalize::{ActivityFeed, MarketOverview, Proposal, Reserve};
pub use subgraph::{GraphQlTransport, HttpTransport, QueryKind, SubgraphClient};
pub use timestamp::format_date;
pub use types::rate::RayRate;
pub use types::tokens::{NormalizedAmount, ReservePrice, TokenAmount, TokenDecimals, UsdValue};
