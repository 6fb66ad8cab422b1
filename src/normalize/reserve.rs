// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Reserve metrics and the market overview

use serde::Serialize;
use tracing::{debug, info};

use super::{normalize_each, required};
use crate::errors::NormalizationError;
use crate::subgraph::records::{RawPrice, RawReserve};
use crate::types::rate::RayRate;
use crate::types::tokens::{
    parse_decimal, NormalizedAmount, ReservePrice, TokenAmount, TokenDecimals, UsdValue,
};

/// A reserve ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reserve {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub decimals: TokenDecimals,
    /// Supply APY in percent
    pub liquidity_rate_pct: f64,
    pub variable_borrow_rate_pct: f64,
    pub stable_borrow_rate_pct: f64,
    /// Total liquidity in whole tokens
    pub native_liquidity: NormalizedAmount,
    pub native_liquidity_millions: f64,
    pub usd_liquidity_millions: UsdValue,
    pub utilization_pct: f64,
    pub price: ReservePrice,
}

impl Reserve {
    /// This reserve's share of the total market size, in billions of USD
    ///
    /// Evaluated as `liquidity / 1e9 * priceInEth / usdPriceEth`.
    pub fn market_size_billions(&self) -> UsdValue {
        UsdValue::new(
            self.native_liquidity.in_billions() * self.price.price_in_eth
                / self.price.usd_price_eth,
        )
    }
}

fn reserve_price(raw: Option<&RawPrice>) -> Result<ReservePrice, NormalizationError> {
    let raw = raw.ok_or(NormalizationError::missing_field("price"))?;
    let price_in_eth = required("priceInEth", &raw.price_in_eth)?;
    let usd_price_eth = raw
        .oracle
        .as_ref()
        .and_then(|oracle| oracle.usd_price_eth.as_deref())
        .ok_or(NormalizationError::missing_field("usdPriceEth"))?;
    ReservePrice::parse(price_in_eth, usd_price_eth)
}

fn rate_pct(field: &'static str, value: &Option<String>) -> Result<f64, NormalizationError> {
    RayRate::parse(field, required(field, value)?)?.as_percent()
}

/// Normalize one reserve
///
/// # Errors
///
/// Fails when the decimals are missing or unsupported, a numeric field does
/// not parse, or the USD valuation is not finite (a zero `usdPriceEth`).
///
/// # Examples
///
/// ```
/// use aavescan::normalize::normalize_reserve;
/// use aavescan::subgraph::records::{RawOracle, RawPrice, RawReserve};
///
/// let raw = RawReserve {
///     id: "dai".into(),
///     symbol: Some("DAI".into()),
///     decimals: Some("18".into()),
///     liquidity_rate: Some("30000000000000000000000000".into()),
///     variable_borrow_rate: Some("0".into()),
///     stable_borrow_rate: Some("0".into()),
///     total_liquidity: Some("5000000000000000000000000".into()),
///     utilization_rate: Some("0.5".into()),
///     price: Some(RawPrice {
///         price_in_eth: Some("1".into()),
///         oracle: Some(RawOracle { usd_price_eth: Some("0.0005".into()) }),
///     }),
///     ..Default::default()
/// };
///
/// let reserve = normalize_reserve(&raw).unwrap();
/// assert!((reserve.liquidity_rate_pct - 3.0).abs() < 1e-9);
/// assert!((reserve.usd_liquidity_millions.as_f64() - 10_000.0).abs() < 1e-6);
/// ```
pub fn normalize_reserve(raw: &RawReserve) -> Result<Reserve, NormalizationError> {
    let decimals: TokenDecimals = required("decimals", &raw.decimals)?.parse()?;
    let native_liquidity = TokenAmount::parse(
        "totalLiquidity",
        required("totalLiquidity", &raw.total_liquidity)?,
    )?
    .normalize(decimals)?;
    let price = reserve_price(raw.price.as_ref())?;

    let native_liquidity_millions = native_liquidity.in_millions();
    let usd_liquidity_millions =
        NormalizedAmount::new(native_liquidity_millions).to_usd(price.usd_multiplier()?);
    if !usd_liquidity_millions.is_finite() {
        return Err(NormalizationError::non_finite("usdLiquidityMillions"));
    }

    let utilization = parse_decimal(
        "utilizationRate",
        required("utilizationRate", &raw.utilization_rate)?,
    )?;

    Ok(Reserve {
        id: raw.id.clone(),
        name: raw.name.clone().unwrap_or_default(),
        symbol: raw.symbol.clone().unwrap_or_default(),
        decimals,
        liquidity_rate_pct: rate_pct("liquidityRate", &raw.liquidity_rate)?,
        variable_borrow_rate_pct: rate_pct("variableBorrowRate", &raw.variable_borrow_rate)?,
        stable_borrow_rate_pct: rate_pct("stableBorrowRate", &raw.stable_borrow_rate)?,
        native_liquidity,
        native_liquidity_millions,
        usd_liquidity_millions,
        utilization_pct: utilization * 100.0,
        price,
    })
}

/// Normalized reserves plus the aggregate market size
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverview {
    /// Reserves by USD liquidity, largest first
    pub reserves: Vec<Reserve>,
    pub total_market_size_billions: UsdValue,
}

impl MarketOverview {
    /// Build an overview from already normalized reserves
    ///
    /// Sorting is stable, so reserves with equal USD liquidity keep the order
    /// they were given in.
    pub fn from_reserves(mut reserves: Vec<Reserve>) -> Self {
        reserves.sort_by(|a, b| b.usd_liquidity_millions.total_cmp(&a.usd_liquidity_millions));
        let total_market_size_billions = reserves.iter().map(Reserve::market_size_billions).sum();
        Self {
            reserves,
            total_market_size_billions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reserves.is_empty()
    }
}

/// Normalize every reserve, skipping the ones that fail, and aggregate
pub fn market_overview(raw: &[RawReserve]) -> MarketOverview {
    let reserves = normalize_each("reserves", raw, |r| r.id.as_str(), normalize_reserve);
    debug!(
        fetched = raw.len(),
        normalized = reserves.len(),
        "Normalized reserves"
    );

    let overview = MarketOverview::from_reserves(reserves);
    info!(
        reserves = overview.reserves.len(),
        total_market_size_billions = overview.total_market_size_billions.as_f64(),
        "Built market overview"
    );
    overview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subgraph::records::RawOracle;

    fn raw_reserve(id: &str, total_liquidity: &str, decimals: &str, usd_price_eth: &str) -> RawReserve {
        RawReserve {
            id: id.to_string(),
            name: Some(format!("{id} token")),
            symbol: Some(id.to_uppercase()),
            decimals: Some(decimals.to_string()),
            liquidity_rate: Some("25000000000000000000000000".to_string()),
            variable_borrow_rate: Some("40000000000000000000000000".to_string()),
            stable_borrow_rate: Some("100000000000000000000000000".to_string()),
            total_deposits: Some(total_liquidity.to_string()),
            total_liquidity: Some(total_liquidity.to_string()),
            average_stable_rate: Some("0".to_string()),
            utilization_rate: Some("0.42".to_string()),
            price: Some(RawPrice {
                price_in_eth: Some("1".to_string()),
                oracle: Some(RawOracle {
                    usd_price_eth: Some(usd_price_eth.to_string()),
                }),
            }),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_five_million_tokens_at_two_thousand_usd() {
        let reserve =
            normalize_reserve(&raw_reserve("weth", "5000000000000000000000000", "18", "0.0005"))
                .unwrap();

        assert!(approx(reserve.native_liquidity_millions, 5.0));
        assert!(approx(reserve.usd_liquidity_millions.as_f64(), 10_000.0));
        assert!(approx(reserve.market_size_billions().as_f64(), 10.0));
    }

    #[test]
    fn test_rates_and_utilization() {
        let reserve = normalize_reserve(&raw_reserve("dai", "1000000", "6", "0.0005")).unwrap();

        assert!(approx(reserve.liquidity_rate_pct, 2.5));
        assert!(approx(reserve.variable_borrow_rate_pct, 4.0));
        assert!(approx(reserve.stable_borrow_rate_pct, 10.0));
        assert!(approx(reserve.utilization_pct, 42.0));
        assert_eq!(reserve.symbol, "DAI");
        assert_eq!(reserve.decimals, TokenDecimals::USDC);
    }

    #[test]
    fn test_unsupported_decimals() {
        let err = normalize_reserve(&raw_reserve("odd", "1", "24", "0.0005")).unwrap_err();
        assert_eq!(err, NormalizationError::UnsupportedDecimals { decimals: 24 });
    }

    #[test]
    fn test_missing_decimals() {
        let mut raw = raw_reserve("dai", "1", "18", "0.0005");
        raw.decimals = None;
        assert_eq!(
            normalize_reserve(&raw),
            Err(NormalizationError::missing_field("decimals"))
        );
    }

    #[test]
    fn test_zero_oracle_price_is_rejected() {
        let err = normalize_reserve(&raw_reserve("dai", "1", "18", "0")).unwrap_err();
        assert!(matches!(err, NormalizationError::NonFiniteValue { .. }));
    }

    #[test]
    fn test_unparseable_liquidity() {
        let err = normalize_reserve(&raw_reserve("dai", "12abc", "18", "0.0005")).unwrap_err();
        assert!(matches!(
            err,
            NormalizationError::InvalidNumber {
                field: "totalLiquidity",
                ..
            }
        ));
    }

    #[test]
    fn test_overview_sorts_descending_and_keeps_tie_order() {
        let raw = vec![
            raw_reserve("small", "1000000000000000000", "18", "0.0005"),
            raw_reserve("tie-a", "5000000000000000000", "18", "0.0005"),
            raw_reserve("large", "9000000000000000000", "18", "0.0005"),
            raw_reserve("tie-b", "5000000000000000000", "18", "0.0005"),
        ];

        let overview = market_overview(&raw);
        let ids: Vec<_> = overview.reserves.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["large", "tie-a", "tie-b", "small"]);
    }

    #[test]
    fn test_overview_skips_bad_reserves_and_totals_the_rest() {
        let raw = vec![
            raw_reserve("weth", "5000000000000000000000000", "18", "0.0005"),
            raw_reserve("broken", "1", "30", "0.0005"),
            raw_reserve("usdc", "2000000000000", "6", "0.0005"),
        ];

        let overview = market_overview(&raw);
        assert_eq!(overview.reserves.len(), 2);
        // 5M tokens and 2M tokens, each worth 2000 USD
        assert!(approx(overview.total_market_size_billions.as_f64(), 14.0));
    }

    #[test]
    fn test_empty_overview() {
        let overview = market_overview(&[]);
        assert!(overview.is_empty());
        assert_eq!(overview.total_market_size_billions, UsdValue::ZERO);
    }
}
