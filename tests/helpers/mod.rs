// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for aavescan integration tests
//!
//! Provides a mock [`GraphQlTransport`] and canned subgraph payloads so the
//! dashboard can be exercised without network access.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use aavescan::errors::FetchError;
use aavescan::subgraph::QueryKind;
use aavescan::{Dashboard, DashboardConfig, DashboardConfigBuilder, GraphQlTransport};
use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Barrier;
use url::Url;

/// What the mock answers for one query
#[derive(Debug, Clone)]
pub enum Canned {
    /// The `data` object of a successful response
    Data(Value),
    /// A non-2xx HTTP status
    HttpStatus(u16),
    /// A GraphQL `errors` array
    GraphQlErrors(Vec<String>),
    /// Never answers
    Hang,
}

/// Mock GraphQlTransport for testing dashboard orchestration
///
/// Queries are recognized by their document. Unconfigured queries answer
/// with an empty `data` object.
///
/// # Example
///
/// ```rust,ignore
/// let mock = MockTransport::new()
///     .with_response(QueryKind::Reserves, Canned::Data(reserves_data()))
///     .with_response(QueryKind::Governance, Canned::HttpStatus(502));
///
/// let snapshot = dashboard(mock, Duration::from_secs(5)).load().await;
/// ```
#[derive(Default)]
pub struct MockTransport {
    responses: HashMap<QueryKind, Canned>,
    delay: Duration,
    barrier: Option<Arc<Barrier>>,
    calls: Mutex<Vec<(QueryKind, String)>>,
}

impl MockTransport {
    /// Create a mock that answers every query with empty data
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer for one query
    pub fn with_response(mut self, query: QueryKind, response: Canned) -> Self {
        self.responses.insert(query, response);
        self
    }

    /// Delay every answer
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Make every query wait until `parties` queries are in flight at once
    pub fn with_rendezvous(mut self, parties: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    /// Queries received so far, with the endpoint each was sent to
    pub fn calls(&self) -> Vec<(QueryKind, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphQlTransport for MockTransport {
    async fn execute(&self, endpoint: &Url, document: &str) -> Result<Value, FetchError> {
        let query = QueryKind::ALL
            .into_iter()
            .find(|query| query.document() == document)
            .expect("unknown document sent to mock transport");
        self.calls
            .lock()
            .unwrap()
            .push((query, endpoint.to_string()));

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match self.responses.get(&query).cloned() {
            None => Ok(json!({})),
            Some(Canned::Data(data)) => Ok(data),
            Some(Canned::HttpStatus(status)) => Err(FetchError::HttpStatus {
                endpoint: endpoint.to_string(),
                status,
            }),
            Some(Canned::GraphQlErrors(messages)) => Err(FetchError::GraphQl {
                endpoint: endpoint.to_string(),
                messages,
            }),
            Some(Canned::Hang) => std::future::pending().await,
        }
    }
}

pub const LENDING_URL: &str = "http://lending.test/subgraphs/name/aave/protocol-v2";
pub const GOVERNANCE_URL: &str = "http://governance.test/subgraphs/name/aave/governance-v2";

/// Configuration pointing at the test endpoints
pub fn test_config(timeout: Duration) -> DashboardConfig {
    DashboardConfigBuilder::new()
        .lending_endpoint(Url::parse(LENDING_URL).unwrap())
        .governance_endpoint(Url::parse(GOVERNANCE_URL).unwrap())
        .request_timeout(timeout)
        .build()
}

/// Dashboard over a mock transport, returning the mock for inspection
pub fn dashboard(mock: MockTransport, timeout: Duration) -> (Dashboard, Arc<MockTransport>) {
    let mock = Arc::new(mock);
    let dashboard = Dashboard::new(mock.clone(), &test_config(timeout));
    (dashboard, mock)
}

pub fn reserve_json(symbol: &str, decimals: u8, total_liquidity: &str, usd_price_eth: &str) -> Value {
    json!({
        "id": format!("0x{}", symbol.to_lowercase()),
        "name": format!("{symbol} Token"),
        "symbol": symbol,
        "decimals": decimals,
        "liquidityRate": "25000000000000000000000000",
        "variableBorrowRate": "40000000000000000000000000",
        "stableBorrowRate": "100000000000000000000000000",
        "totalDeposits": total_liquidity,
        "totalLiquidity": total_liquidity,
        "averageStableRate": "0",
        "utilizationRate": "0.42",
        "price": {
            "priceInEth": "1",
            "oracle": { "usdPriceEth": usd_price_eth }
        }
    })
}

/// Reserves in backend order: DAI, WETH, then a reserve with bad decimals
pub fn reserves_data() -> Value {
    json!({
        "reserves": [
            reserve_json("DAI", 18, "1000000000000000000000000", "0.0005"),
            reserve_json("WETH", 18, "5000000000000000000000000", "0.0005"),
            reserve_json("BAD", 77, "1", "0.0005"),
        ]
    })
}

fn reserve_ref(symbol: &str, decimals: u8) -> Value {
    json!({
        "id": format!("0x{}", symbol.to_lowercase()),
        "name": format!("{symbol} Token"),
        "symbol": symbol,
        "decimals": decimals
    })
}

pub fn activity_data() -> Value {
    json!({
        "deposits": [
            {
                "id": "0xdep1:10",
                "amount": "2500000",
                "timestamp": 1620000000,
                "reserve": reserve_ref("USDC", 6)
            },
            {
                "id": "0xdep2:11",
                "amount": "not a number",
                "timestamp": 1619999000,
                "reserve": reserve_ref("USDC", 6)
            }
        ],
        "borrows": [],
        "flashLoans": [
            {
                "id": "0xflash:3",
                "amount": "1000000000000000000000",
                "totalFee": "900000000000000000",
                "timestamp": 1620000000,
                "reserve": reserve_ref("WETH", 18)
            }
        ],
        "liquidationCalls": [],
        "swaps": [],
        "redeemUnderlyings": [],
        "repays": [],
        "usageAsCollaterals": [
            {
                "id": "0xusage:1",
                "timestamp": 0,
                "reserve": reserve_ref("LINK", 18),
                "fromState": false,
                "toState": true
            }
        ],
        "users": [
            {
                "id": "0x25f2226b597e8f9514b3f68f00f494cf4f286491",
                "lifetimeRewards": "42000000000000000000"
            }
        ],
        "swapHistories": [
            {
                "id": "0xswap:2",
                "fromAsset": "0xaaa",
                "toAsset": "0xbbb",
                "fromAmount": "5000000000000000000000000",
                "receivedAmount": "4990000000000000000000000",
                "swapType": "liquidity"
            }
        ]
    })
}

pub fn proposals_data() -> Value {
    json!({
        "proposals": [
            {
                "id": "12",
                "state": "Executed",
                "ipfsHash": "QmProposal12",
                "creator": "0xcreator",
                "totalCurrentVoters": 118,
                "startBlock": "12000000",
                "endBlock": "12019200",
                "currentYesVote": "512345000000000000000000",
                "currentNoVote": "0",
                "createdTimestamp": 1620000000,
                "title": "Add xSUSHI",
                "shortDescription": "List xSUSHI",
                "author": "Aave Genesis",
                "aipNumber": 12
            }
        ]
    })
}

/// A mock answering all three queries with the canned payloads
pub fn healthy_mock() -> MockTransport {
    MockTransport::new()
        .with_response(QueryKind::Reserves, Canned::Data(reserves_data()))
        .with_response(QueryKind::Activity, Canned::Data(activity_data()))
        .with_response(QueryKind::Governance, Canned::Data(proposals_data()))
}
