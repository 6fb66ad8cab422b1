//! Transaction hashes and outbound links
//!
//! Subgraph event ids look like `<tx hash>:<log index>`; the part before the
//! first `:` is the on-chain transaction hash used for explorer links.

use crate::config::constants::links::{ETHERSCAN_ADDRESS, ETHERSCAN_TX, IPFS_GATEWAY};

/// Extract the transaction hash from a subgraph event id
///
/// Returns the segment before the first `:`, or the whole id when there is
/// no delimiter.
///
/// # Examples
///
/// ```
/// use aavescan::extract_tx_hash;
///
/// assert_eq!(extract_tx_hash("0xabc123:45"), "0xabc123");
/// assert_eq!(extract_tx_hash("noSeparator"), "noSeparator");
/// ```
pub fn extract_tx_hash(id: &str) -> &str {
    id.split(':').next().unwrap_or(id)
}

/// Etherscan link for a transaction hash
pub fn tx_url(hash: &str) -> String {
    format!("{ETHERSCAN_TX}{hash}")
}

/// Etherscan link for an account address
pub fn address_url(address: &str) -> String {
    format!("{ETHERSCAN_ADDRESS}{address}")
}

/// IPFS gateway link for a content hash
pub fn ipfs_url(hash: &str) -> String {
    format!("{IPFS_GATEWAY}{hash}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tx_hash() {
        assert_eq!(extract_tx_hash("0xabc123:45"), "0xabc123");
        assert_eq!(extract_tx_hash("noSeparator"), "noSeparator");
        assert_eq!(extract_tx_hash("0xabc:1:2"), "0xabc");
        assert_eq!(extract_tx_hash(":7"), "");
        assert_eq!(extract_tx_hash(""), "");
    }

    #[test]
    fn test_link_templates() {
        assert_eq!(tx_url("0xabc"), "https://etherscan.io/tx/0xabc");
        assert_eq!(address_url("0xdef"), "https://etherscan.io/address/0xdef");
        assert_eq!(ipfs_url("QmHash"), "https://ipfs.io/ipfs/QmHash");
    }
}
