// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Reserve price type (asset price in ETH plus the ETH/USD oracle quote)

use serde::{Deserialize, Serialize};

use crate::errors::NormalizationError;

/// Parse a subgraph numeric field (`BigInt` or `BigDecimal` string) as `f64`
///
/// Rejects NaN and infinities, which `f64::from_str` would otherwise accept.
pub(crate) fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, NormalizationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(NormalizationError::invalid_number(field, raw)),
    }
}

/// Oracle pricing for one reserve
///
/// The lending subgraph prices every asset in ETH (`priceInEth`) and quotes
/// ETH against USD through the oracle's `usdPriceEth`, which is the price of
/// one USD in ETH. Multiplying by `priceInEth` and by the reciprocal of
/// `usdPriceEth` converts an amount of the asset into USD.
///
/// # Examples
///
/// ```
/// use aavescan::ReservePrice;
///
/// // Asset worth 1 ETH, 1 USD worth 0.0005 ETH (ETH at $2000)
/// let price = ReservePrice::new(1.0, 0.0005);
/// assert_eq!(price.usd_multiplier().unwrap(), 2000.0);
///
/// // A zero oracle quote has no USD conversion
/// assert!(ReservePrice::new(1.0, 0.0).usd_multiplier().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservePrice {
    /// Price of one unit of the asset in ETH
    pub price_in_eth: f64,
    /// Price of one USD in ETH
    pub usd_price_eth: f64,
}

impl ReservePrice {
    /// Create a reserve price from its two oracle quotes
    pub const fn new(price_in_eth: f64, usd_price_eth: f64) -> Self {
        Self {
            price_in_eth,
            usd_price_eth,
        }
    }

    /// Parse both quotes from their raw subgraph strings
    pub fn parse(price_in_eth: &str, usd_price_eth: &str) -> Result<Self, NormalizationError> {
        Ok(Self::new(
            parse_decimal("priceInEth", price_in_eth)?,
            parse_decimal("usdPriceEth", usd_price_eth)?,
        ))
    }

    /// USD per unit of the asset: `priceInEth * (1 / usdPriceEth)`
    ///
    /// # Errors
    ///
    /// Returns [`NormalizationError::NonFiniteValue`] when the result is NaN or
    /// infinite, which happens when the oracle quote is zero.
    pub fn usd_multiplier(&self) -> Result<f64, NormalizationError> {
        let multiplier = self.price_in_eth * (1.0 / self.usd_price_eth);
        if multiplier.is_finite() {
            Ok(multiplier)
        } else {
            Err(NormalizationError::non_finite("usdPriceEth"))
        }
    }
}
