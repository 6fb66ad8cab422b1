// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw subgraph records, exactly as fetched
//!
//! Scalar fields are kept as text: the subgraph encodes `BigInt` and
//! `BigDecimal` as strings and `Int` as numbers, and a malformed value must
//! only fail its own record during normalization, never the whole response.
//! Absent and `null` fields become `None`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accept a string, number or boolean as text; `null` becomes `None`
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a scalar, found {other}"
        ))),
    }
}

/// Minimal reserve reference embedded in activity records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReserveRef {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub decimals: Option<String>,
}

/// ETH/USD oracle quote attached to a reserve price
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOracle {
    #[serde(default, deserialize_with = "lenient_text")]
    pub usd_price_eth: Option<String>,
}

/// Asset price in ETH plus its oracle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPrice {
    #[serde(default, deserialize_with = "lenient_text")]
    pub price_in_eth: Option<String>,
    #[serde(default)]
    pub oracle: Option<RawOracle>,
}

/// A lending-pool reserve with its rate and liquidity metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReserve {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub decimals: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub liquidity_rate: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub variable_borrow_rate: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub stable_borrow_rate: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub total_deposits: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub total_liquidity: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub average_stable_rate: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub utilization_rate: Option<String>,
    #[serde(default)]
    pub price: Option<RawPrice>,
}

/// Deposit, borrow, redeem or repay: an amount moved against one reserve
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReserveEvent {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub reserve: Option<RawReserveRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFlashLoan {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub total_fee: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub reserve: Option<RawReserveRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLiquidationCall {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub collateral_reserve: Option<RawReserveRef>,
    #[serde(default)]
    pub principal_reserve: Option<RawReserveRef>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub collateral_amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub principal_amount: Option<String>,
}

/// Borrow-rate mode swap (stable to variable or back)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRateSwap {
    pub id: String,
    #[serde(default)]
    pub reserve: Option<RawReserveRef>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub borrow_rate_mode_from: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub borrow_rate_mode_to: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub stable_borrow_rate: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub variable_borrow_rate: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub timestamp: Option<String>,
}

/// A user enabling or disabling a reserve as collateral
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCollateralUsage {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub reserve: Option<RawReserveRef>,
    #[serde(default)]
    pub from_state: Option<bool>,
    #[serde(default)]
    pub to_state: Option<bool>,
}

/// Collateral/liquidity swap history entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSwapHistory {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub from_asset: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub to_asset: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub from_amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub received_amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub swap_type: Option<String>,
}

/// A user and the incentives it has accrued
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRewardUser {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub lifetime_rewards: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProposal {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub ipfs_hash: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub creator: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub total_current_voters: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub start_block: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub end_block: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub current_yes_vote: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub current_no_vote: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub aip_number: Option<String>,
}

/// `data` object of the reserve query
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReservesData {
    #[serde(default)]
    pub reserves: Vec<RawReserve>,
}

/// `data` object of the activity query
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityData {
    #[serde(default)]
    pub deposits: Vec<RawReserveEvent>,
    #[serde(default)]
    pub borrows: Vec<RawReserveEvent>,
    #[serde(default)]
    pub flash_loans: Vec<RawFlashLoan>,
    #[serde(default)]
    pub liquidation_calls: Vec<RawLiquidationCall>,
    #[serde(default)]
    pub swaps: Vec<RawRateSwap>,
    #[serde(default)]
    pub redeem_underlyings: Vec<RawReserveEvent>,
    #[serde(default)]
    pub repays: Vec<RawReserveEvent>,
    #[serde(default)]
    pub usage_as_collaterals: Vec<RawCollateralUsage>,
    #[serde(default)]
    pub users: Vec<RawRewardUser>,
    #[serde(default)]
    pub swap_histories: Vec<RawSwapHistory>,
}

/// `data` object of the governance query
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProposalsData {
    #[serde(default)]
    pub proposals: Vec<RawProposal>,
}
