//! Protocol activity: reserve events, flash loans, liquidations, rate swaps,
//! collateral changes, swap histories and reward users

use std::str::FromStr;

use alloy_primitives::Address;
use serde::Serialize;
use tracing::debug;

use super::{normalize_each, required};
use crate::config::constants::GOVERNANCE_TOKEN_DECIMALS;
use crate::errors::NormalizationError;
use crate::links;
use crate::subgraph::records::{
    RawCollateralUsage, RawFlashLoan, RawLiquidationCall, RawRateSwap, RawReserveEvent,
    RawReserveRef, RawRewardUser, RawSwapHistory,
};
use crate::subgraph::ActivityData;
use crate::timestamp::{format_date, parse_epoch};
use crate::types::rate::RayRate;
use crate::types::tokens::{NormalizedAmount, TokenAmount, TokenDecimals};

/// The reserve an activity record moved funds in
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveRef {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub decimals: TokenDecimals,
}

impl ReserveRef {
    fn from_raw(field: &'static str, raw: Option<&RawReserveRef>) -> Result<Self, NormalizationError> {
        let raw = raw.ok_or(NormalizationError::missing_field(field))?;
        Ok(Self {
            id: raw.id.clone().unwrap_or_default(),
            name: raw.name.clone().unwrap_or_default(),
            symbol: raw.symbol.clone().unwrap_or_default(),
            decimals: required("decimals", &raw.decimals)?.parse()?,
        })
    }

    /// Normalize a raw amount of this reserve's token
    pub fn normalize(
        &self,
        field: &'static str,
        raw: &Option<String>,
    ) -> Result<NormalizedAmount, NormalizationError> {
        TokenAmount::parse(field, required(field, raw)?)?.normalize(self.decimals)
    }
}

/// Transaction hash and time shared by every event record
fn event_meta(id: &str, timestamp: &Option<String>) -> (String, Option<i64>, String) {
    let timestamp = parse_epoch(timestamp.as_deref());
    (
        links::extract_tx_hash(id).to_string(),
        timestamp,
        format_date(timestamp),
    )
}

/// Deposit, borrow, redeem or repay
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveEvent {
    pub id: String,
    pub tx_hash: String,
    pub timestamp: Option<i64>,
    pub date: String,
    pub amount: NormalizedAmount,
    pub reserve: ReserveRef,
}

impl ReserveEvent {
    pub fn from_raw(raw: &RawReserveEvent) -> Result<Self, NormalizationError> {
        let reserve = ReserveRef::from_raw("reserve", raw.reserve.as_ref())?;
        let amount = reserve.normalize("amount", &raw.amount)?;
        let (tx_hash, timestamp, date) = event_meta(&raw.id, &raw.timestamp);
        Ok(Self {
            id: raw.id.clone(),
            tx_hash,
            timestamp,
            date,
            amount,
            reserve,
        })
    }

    pub fn tx_url(&self) -> String {
        links::tx_url(&self.tx_hash)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashLoan {
    pub id: String,
    pub tx_hash: String,
    pub timestamp: Option<i64>,
    pub date: String,
    pub amount: NormalizedAmount,
    pub total_fee: NormalizedAmount,
    pub reserve: ReserveRef,
}

impl FlashLoan {
    pub fn from_raw(raw: &RawFlashLoan) -> Result<Self, NormalizationError> {
        let reserve = ReserveRef::from_raw("reserve", raw.reserve.as_ref())?;
        let amount = reserve.normalize("amount", &raw.amount)?;
        let total_fee = reserve.normalize("totalFee", &raw.total_fee)?;
        let (tx_hash, timestamp, date) = event_meta(&raw.id, &raw.timestamp);
        Ok(Self {
            id: raw.id.clone(),
            tx_hash,
            timestamp,
            date,
            amount,
            total_fee,
            reserve,
        })
    }

    pub fn tx_url(&self) -> String {
        links::tx_url(&self.tx_hash)
    }
}

/// A liquidation, with each side scaled by its own reserve's decimals
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Liquidation {
    pub id: String,
    pub tx_hash: String,
    pub timestamp: Option<i64>,
    pub date: String,
    pub collateral_amount: NormalizedAmount,
    pub collateral_reserve: ReserveRef,
    pub principal_amount: NormalizedAmount,
    pub principal_reserve: ReserveRef,
}

impl Liquidation {
    pub fn from_raw(raw: &RawLiquidationCall) -> Result<Self, NormalizationError> {
        let collateral_reserve =
            ReserveRef::from_raw("collateralReserve", raw.collateral_reserve.as_ref())?;
        let principal_reserve =
            ReserveRef::from_raw("principalReserve", raw.principal_reserve.as_ref())?;
        let collateral_amount =
            collateral_reserve.normalize("collateralAmount", &raw.collateral_amount)?;
        let principal_amount =
            principal_reserve.normalize("principalAmount", &raw.principal_amount)?;
        let (tx_hash, timestamp, date) = event_meta(&raw.id, &raw.timestamp);
        Ok(Self {
            id: raw.id.clone(),
            tx_hash,
            timestamp,
            date,
            collateral_amount,
            collateral_reserve,
            principal_amount,
            principal_reserve,
        })
    }

    pub fn tx_url(&self) -> String {
        links::tx_url(&self.tx_hash)
    }
}

/// A borrow-rate mode swap with the rates at the time of the swap
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSwap {
    pub id: String,
    pub tx_hash: String,
    pub timestamp: Option<i64>,
    pub date: String,
    pub reserve: ReserveRef,
    pub rate_mode_from: String,
    pub rate_mode_to: String,
    pub stable_borrow_rate_pct: f64,
    pub variable_borrow_rate_pct: f64,
}

impl RateSwap {
    pub fn from_raw(raw: &RawRateSwap) -> Result<Self, NormalizationError> {
        let reserve = ReserveRef::from_raw("reserve", raw.reserve.as_ref())?;
        let stable_borrow_rate_pct = RayRate::parse(
            "stableBorrowRate",
            required("stableBorrowRate", &raw.stable_borrow_rate)?,
        )?
        .as_percent()?;
        let variable_borrow_rate_pct = RayRate::parse(
            "variableBorrowRate",
            required("variableBorrowRate", &raw.variable_borrow_rate)?,
        )?
        .as_percent()?;
        let (tx_hash, timestamp, date) = event_meta(&raw.id, &raw.timestamp);
        Ok(Self {
            id: raw.id.clone(),
            tx_hash,
            timestamp,
            date,
            reserve,
            rate_mode_from: raw.borrow_rate_mode_from.clone().unwrap_or_default(),
            rate_mode_to: raw.borrow_rate_mode_to.clone().unwrap_or_default(),
            stable_borrow_rate_pct,
            variable_borrow_rate_pct,
        })
    }

    pub fn tx_url(&self) -> String {
        links::tx_url(&self.tx_hash)
    }
}

/// A reserve enabled or disabled as collateral
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollateralChange {
    pub id: String,
    pub tx_hash: String,
    pub timestamp: Option<i64>,
    pub date: String,
    pub reserve: ReserveRef,
    pub from_state: bool,
    pub to_state: bool,
}

impl CollateralChange {
    pub fn from_raw(raw: &RawCollateralUsage) -> Result<Self, NormalizationError> {
        let reserve = ReserveRef::from_raw("reserve", raw.reserve.as_ref())?;
        let from_state = raw
            .from_state
            .ok_or(NormalizationError::missing_field("fromState"))?;
        let to_state = raw
            .to_state
            .ok_or(NormalizationError::missing_field("toState"))?;
        let (tx_hash, timestamp, date) = event_meta(&raw.id, &raw.timestamp);
        Ok(Self {
            id: raw.id.clone(),
            tx_hash,
            timestamp,
            date,
            reserve,
            from_state,
            to_state,
        })
    }

    pub fn tx_url(&self) -> String {
        links::tx_url(&self.tx_hash)
    }
}

/// Swap history entry; amounts stay raw since no reserve decimals come with it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapHistoryEntry {
    pub id: String,
    pub tx_hash: String,
    pub swap_type: String,
    pub from_asset: String,
    pub to_asset: String,
    pub from_amount: Option<TokenAmount>,
    pub received_amount: Option<TokenAmount>,
}

impl SwapHistoryEntry {
    pub fn from_raw(raw: &RawSwapHistory) -> Result<Self, NormalizationError> {
        let from_amount = raw
            .from_amount
            .as_deref()
            .map(|value| TokenAmount::parse("fromAmount", value))
            .transpose()?;
        let received_amount = raw
            .received_amount
            .as_deref()
            .map(|value| TokenAmount::parse("receivedAmount", value))
            .transpose()?;
        Ok(Self {
            id: raw.id.clone(),
            tx_hash: links::extract_tx_hash(&raw.id).to_string(),
            swap_type: raw.swap_type.clone().unwrap_or_default(),
            from_asset: raw.from_asset.clone().unwrap_or_default(),
            to_asset: raw.to_asset.clone().unwrap_or_default(),
            from_amount,
            received_amount,
        })
    }

    pub fn tx_url(&self) -> String {
        links::tx_url(&self.tx_hash)
    }
}

/// A user ranked by lifetime incentive rewards
///
/// `id` is the account address exactly as the subgraph returned it, once it
/// has been checked to parse as one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardUser {
    pub id: String,
    pub lifetime_rewards: NormalizedAmount,
}

impl RewardUser {
    pub fn from_raw(raw: &RawRewardUser) -> Result<Self, NormalizationError> {
        let id = raw.id.trim();
        Address::from_str(id).map_err(|_| NormalizationError::InvalidAddress {
            value: raw.id.clone(),
        })?;
        let lifetime_rewards = TokenAmount::parse(
            "lifetimeRewards",
            required("lifetimeRewards", &raw.lifetime_rewards)?,
        )?
        .normalize(TokenDecimals::new(GOVERNANCE_TOKEN_DECIMALS))?;
        Ok(Self {
            id: id.to_string(),
            lifetime_rewards,
        })
    }

    pub fn address_url(&self) -> String {
        links::address_url(&self.id)
    }
}

/// Every activity list from one activity query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFeed {
    pub flash_loans: Vec<FlashLoan>,
    pub deposits: Vec<ReserveEvent>,
    pub borrows: Vec<ReserveEvent>,
    pub liquidations: Vec<Liquidation>,
    pub rate_swaps: Vec<RateSwap>,
    pub redeems: Vec<ReserveEvent>,
    pub repays: Vec<ReserveEvent>,
    pub collateral_changes: Vec<CollateralChange>,
    pub swap_histories: Vec<SwapHistoryEntry>,
    pub reward_users: Vec<RewardUser>,
}

impl ActivityFeed {
    /// Total number of records across all lists
    pub fn len(&self) -> usize {
        self.flash_loans.len()
            + self.deposits.len()
            + self.borrows.len()
            + self.liquidations.len()
            + self.rate_swaps.len()
            + self.redeems.len()
            + self.repays.len()
            + self.collateral_changes.len()
            + self.swap_histories.len()
            + self.reward_users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Normalize an activity response, list by list
///
/// Backend ordering (newest first, or highest rewards first) is kept as is.
pub fn normalize_activity(data: &ActivityData) -> ActivityFeed {
    let feed = ActivityFeed {
        flash_loans: normalize_each("flashLoans", &data.flash_loans, |r| r.id.as_str(), FlashLoan::from_raw),
        deposits: normalize_each("deposits", &data.deposits, |r| r.id.as_str(), ReserveEvent::from_raw),
        borrows: normalize_each("borrows", &data.borrows, |r| r.id.as_str(), ReserveEvent::from_raw),
        liquidations: normalize_each(
            "liquidationCalls",
            &data.liquidation_calls,
            |r| r.id.as_str(),
            Liquidation::from_raw,
        ),
        rate_swaps: normalize_each("swaps", &data.swaps, |r| r.id.as_str(), RateSwap::from_raw),
        redeems: normalize_each(
            "redeemUnderlyings",
            &data.redeem_underlyings,
            |r| r.id.as_str(),
            ReserveEvent::from_raw,
        ),
        repays: normalize_each("repays", &data.repays, |r| r.id.as_str(), ReserveEvent::from_raw),
        collateral_changes: normalize_each(
            "usageAsCollaterals",
            &data.usage_as_collaterals,
            |r| r.id.as_str(),
            CollateralChange::from_raw,
        ),
        swap_histories: normalize_each(
            "swapHistories",
            &data.swap_histories,
            |r| r.id.as_str(),
            SwapHistoryEntry::from_raw,
        ),
        reward_users: normalize_each("users", &data.users, |r| r.id.as_str(), RewardUser::from_raw),
    };

    debug!(records = feed.len(), "Normalized activity feed");
    feed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserve_ref(symbol: &str, decimals: &str) -> Option<RawReserveRef> {
        Some(RawReserveRef {
            id: Some(format!("0x{}", symbol.to_lowercase())),
            name: Some(format!("{symbol} Coin")),
            symbol: Some(symbol.to_string()),
            decimals: Some(decimals.to_string()),
        })
    }

    fn deposit(id: &str, amount: &str, decimals: &str) -> RawReserveEvent {
        RawReserveEvent {
            id: id.to_string(),
            amount: Some(amount.to_string()),
            timestamp: Some("1620000000".to_string()),
            reserve: reserve_ref("USDC", decimals),
        }
    }

    #[test]
    fn test_reserve_event() {
        let event = ReserveEvent::from_raw(&deposit("0xfeed:12", "2500000", "6")).unwrap();

        assert_eq!(event.tx_hash, "0xfeed");
        assert_eq!(event.amount.as_f64(), 2.5);
        assert_eq!(event.timestamp, Some(1_620_000_000));
        assert_eq!(event.date, "Mon, 03 May 2021 00:00:00 GMT");
        assert_eq!(event.reserve.symbol, "USDC");
        assert_eq!(event.tx_url(), "https://etherscan.io/tx/0xfeed");
    }

    #[test]
    fn test_missing_timestamp_gives_empty_date() {
        let mut raw = deposit("0xfeed:1", "1", "0");
        raw.timestamp = None;
        let event = ReserveEvent::from_raw(&raw).unwrap();
        assert_eq!(event.timestamp, None);
        assert_eq!(event.date, "");
    }

    #[test]
    fn test_reserve_event_unsupported_decimals() {
        assert_eq!(
            ReserveEvent::from_raw(&deposit("0x1:1", "1", "19")),
            Err(NormalizationError::UnsupportedDecimals { decimals: 19 })
        );
    }

    #[test]
    fn test_reserve_event_without_reserve() {
        let mut raw = deposit("0x1:1", "1", "6");
        raw.reserve = None;
        assert_eq!(
            ReserveEvent::from_raw(&raw),
            Err(NormalizationError::missing_field("reserve"))
        );
    }

    #[test]
    fn test_flash_loan_normalizes_fee() {
        let raw = RawFlashLoan {
            id: "0xf1a5:3".to_string(),
            amount: Some("1000000000000000000000".to_string()),
            total_fee: Some("900000000000000000".to_string()),
            timestamp: Some("0".to_string()),
            reserve: reserve_ref("WETH", "18"),
        };
        let loan = FlashLoan::from_raw(&raw).unwrap();
        assert!((loan.amount.as_f64() - 1000.0).abs() < 1e-9);
        assert!((loan.total_fee.as_f64() - 0.9).abs() < 1e-12);
        assert_eq!(loan.date, "Thu, 01 Jan 1970 00:00:00 GMT");
    }

    #[test]
    fn test_liquidation_uses_each_reserve_decimals() {
        let raw = RawLiquidationCall {
            id: "0x11q:0".to_string(),
            timestamp: Some("1620000000".to_string()),
            collateral_reserve: reserve_ref("WETH", "18"),
            principal_reserve: reserve_ref("USDC", "6"),
            collateral_amount: Some("2000000000000000000".to_string()),
            principal_amount: Some("3000000000".to_string()),
        };
        let liquidation = Liquidation::from_raw(&raw).unwrap();
        assert!((liquidation.collateral_amount.as_f64() - 2.0).abs() < 1e-12);
        assert!((liquidation.principal_amount.as_f64() - 3000.0).abs() < 1e-9);
        assert_eq!(liquidation.principal_reserve.symbol, "USDC");
    }

    #[test]
    fn test_rate_swap_rates_are_percentages() {
        let raw = RawRateSwap {
            id: "0x5wap:9".to_string(),
            reserve: reserve_ref("DAI", "18"),
            borrow_rate_mode_from: Some("Stable".to_string()),
            borrow_rate_mode_to: Some("Variable".to_string()),
            stable_borrow_rate: Some("110000000000000000000000000".to_string()),
            variable_borrow_rate: Some("35000000000000000000000000".to_string()),
            timestamp: Some("1620000000".to_string()),
        };
        let swap = RateSwap::from_raw(&raw).unwrap();
        assert!((swap.stable_borrow_rate_pct - 11.0).abs() < 1e-9);
        assert!((swap.variable_borrow_rate_pct - 3.5).abs() < 1e-9);
        assert_eq!(swap.rate_mode_from, "Stable");
        assert_eq!(swap.rate_mode_to, "Variable");
    }

    #[test]
    fn test_collateral_change_requires_states() {
        let mut raw = RawCollateralUsage {
            id: "0xc0:1".to_string(),
            timestamp: Some("1".to_string()),
            reserve: reserve_ref("LINK", "18"),
            from_state: Some(false),
            to_state: Some(true),
        };
        let change = CollateralChange::from_raw(&raw).unwrap();
        assert!(!change.from_state);
        assert!(change.to_state);

        raw.to_state = None;
        assert_eq!(
            CollateralChange::from_raw(&raw),
            Err(NormalizationError::missing_field("toState"))
        );
    }

    #[test]
    fn test_swap_history_keeps_raw_amounts() {
        let raw = RawSwapHistory {
            id: "0x5h:2".to_string(),
            from_asset: Some("0xaaa".to_string()),
            to_asset: Some("0xbbb".to_string()),
            from_amount: Some("123456789".to_string()),
            received_amount: None,
            swap_type: Some("liquidity".to_string()),
        };
        let entry = SwapHistoryEntry::from_raw(&raw).unwrap();
        assert_eq!(entry.tx_hash, "0x5h");
        assert_eq!(entry.from_amount, Some(TokenAmount::from(123_456_789u64)));
        assert_eq!(entry.received_amount, None);
        assert_eq!(entry.swap_type, "liquidity");

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["fromAmount"], "123456789");
        assert_eq!(json["receivedAmount"], serde_json::Value::Null);
    }

    #[test]
    fn test_reward_user() {
        let raw = RawRewardUser {
            id: "0x00000000000000000000000000000000000000aa".to_string(),
            lifetime_rewards: Some("42000000000000000000".to_string()),
        };
        let user = RewardUser::from_raw(&raw).unwrap();
        assert!((user.lifetime_rewards.as_f64() - 42.0).abs() < 1e-12);
        assert_eq!(
            user.address_url(),
            "https://etherscan.io/address/0x00000000000000000000000000000000000000aa"
        );
    }

    #[test]
    fn test_reward_user_link_uses_lowercase_id() {
        let raw = RawRewardUser {
            id: " 0x25f2226b597e8f9514b3f68f00f494cf4f286491".to_string(),
            lifetime_rewards: Some("0".to_string()),
        };
        let user = RewardUser::from_raw(&raw).unwrap();
        assert_eq!(user.id, "0x25f2226b597e8f9514b3f68f00f494cf4f286491");
        assert_eq!(
            user.address_url(),
            "https://etherscan.io/address/0x25f2226b597e8f9514b3f68f00f494cf4f286491"
        );
    }

    #[test]
    fn test_reward_user_invalid_address() {
        let raw = RawRewardUser {
            id: "not-an-address".to_string(),
            lifetime_rewards: Some("1".to_string()),
        };
        assert_eq!(
            RewardUser::from_raw(&raw),
            Err(NormalizationError::InvalidAddress {
                value: "not-an-address".to_string()
            })
        );
    }

    #[test]
    fn test_normalize_activity_skips_only_bad_records() {
        let data = ActivityData {
            deposits: vec![
                deposit("0xa:1", "1000000", "6"),
                deposit("0xb:1", "oops", "6"),
                deposit("0xc:1", "3000000", "6"),
            ],
            repays: vec![deposit("0xd:1", "1", "99")],
            ..Default::default()
        };

        let feed = normalize_activity(&data);
        let hashes: Vec<_> = feed.deposits.iter().map(|d| d.tx_hash.as_str()).collect();
        assert_eq!(hashes, vec!["0xa", "0xc"]);
        assert!(feed.repays.is_empty());
        assert_eq!(feed.len(), 2);
        assert!(!feed.is_empty());
    }
}
