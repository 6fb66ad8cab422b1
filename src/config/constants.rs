//! Well-known endpoints, link templates and display divisors
//!
//! This module centralizes the external URLs and magic numbers used across
//! the crate.

/// Subgraph endpoints queried by default
pub mod endpoints {
    /// Aave V2 lending-protocol subgraph (reserves and activity)
    pub const LENDING_SUBGRAPH: &str = "https://api.thegraph.com/subgraphs/name/aave/protocol-v2";

    /// Aave V2 governance subgraph (proposals)
    pub const GOVERNANCE_SUBGRAPH: &str =
        "https://api.thegraph.com/subgraphs/name/aave/governance-v2";
}

/// URL prefixes for outbound links
///
/// These templates are part of the rendered output and must not change.
pub mod links {
    /// Etherscan transaction page, followed by the transaction hash
    pub const ETHERSCAN_TX: &str = "https://etherscan.io/tx/";

    /// Etherscan address page, followed by the address
    pub const ETHERSCAN_ADDRESS: &str = "https://etherscan.io/address/";

    /// IPFS gateway, followed by the content hash
    pub const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";
}

/// Environment variables read by [`DashboardConfig::from_env`](super::DashboardConfig::from_env)
pub mod env {
    /// Overrides the lending subgraph URL
    pub const LENDING_URL: &str = "AAVESCAN_LENDING_URL";

    /// Overrides the governance subgraph URL
    pub const GOVERNANCE_URL: &str = "AAVESCAN_GOVERNANCE_URL";

    /// Per-query timeout in whole seconds
    pub const TIMEOUT_SECS: &str = "AAVESCAN_TIMEOUT_SECS";

    /// Output format, `text` or `json`
    pub const OUTPUT: &str = "AAVESCAN_OUTPUT";
}

/// Decimals used by governance vote counts and AAVE rewards (10^18 scale)
pub const GOVERNANCE_TOKEN_DECIMALS: u8 = 18;

/// Symbol shown next to lifetime rewards
pub const REWARD_SYMBOL: &str = "AAVE";

/// Default per-query timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
