//! Normalization of raw subgraph records
//!
//! Every raw record is turned into a display-ready value:
//!
//! - amounts are divided by `10^decimals` of their reserve
//! - ray rates become percentages (`/ 1e25`)
//! - reserve liquidity is valued in USD through the oracle quotes
//! - timestamps become UTC dates and event ids yield transaction hashes
//!
//! Records that cannot be normalized are skipped and logged one by one; a
//! bad record never empties the rest of its list.

use tracing::warn;

use crate::errors::NormalizationError;
use crate::tracing::spans;

mod activity;
mod governance;
mod reserve;

pub use activity::{
    normalize_activity, ActivityFeed, CollateralChange, FlashLoan, Liquidation, RateSwap,
    ReserveEvent, ReserveRef, RewardUser, SwapHistoryEntry,
};
pub use governance::{normalize_proposal, normalize_proposals, Proposal};
pub use reserve::{market_overview, normalize_reserve, MarketOverview, Reserve};

/// Normalize a collection, skipping and logging records that fail
pub(crate) fn normalize_each<R, T, I, F>(
    collection: &'static str,
    records: &[R],
    id: I,
    normalize: F,
) -> Vec<T>
where
    I: Fn(&R) -> &str,
    F: Fn(&R) -> Result<T, NormalizationError>,
{
    let _span = spans::normalize_records(collection, records.len()).entered();

    records
        .iter()
        .filter_map(|raw| match normalize(raw) {
            Ok(record) => Some(record),
            Err(error) => {
                warn!(
                    collection = collection,
                    id = id(raw),
                    error = %error,
                    "Skipping record that failed normalization"
                );
                None
            }
        })
        .collect()
}

/// Borrow a required text field or report it missing
pub(crate) fn required<'a>(
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, NormalizationError> {
    value
        .as_deref()
        .ok_or(NormalizationError::missing_field(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_each_skips_failures_and_keeps_order() {
        let raw = vec!["1", "x", "3", "", "5"];
        let parsed = normalize_each("numbers", &raw, |r| *r, |r| {
            r.parse::<u32>()
                .map_err(|_| NormalizationError::invalid_number("value", *r))
        });
        assert_eq!(parsed, vec![1, 3, 5]);
    }

    #[test]
    fn test_required() {
        let present = Some("6".to_string());
        assert_eq!(required("decimals", &present).unwrap(), "6");
        assert_eq!(
            required("decimals", &None),
            Err(NormalizationError::missing_field("decimals"))
        );
    }
}
