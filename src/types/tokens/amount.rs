// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type

use alloy_primitives::U256;
use serde::{Serialize, Serializer};

use super::decimals::TokenDecimals;
use super::normalized::NormalizedAmount;
use crate::errors::NormalizationError;

/// Parse a subgraph `BigInt` (a base-10 string) into a [`U256`]
pub(crate) fn parse_big_int(field: &'static str, raw: &str) -> Result<U256, NormalizationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizationError::invalid_number(field, raw));
    }
    U256::from_str_radix(trimmed, 10).map_err(|_| NormalizationError::invalid_number(field, raw))
}

/// Convert a [`U256`] to `f64`, going through its decimal representation
pub(crate) fn u256_to_f64(field: &'static str, value: U256) -> Result<f64, NormalizationError> {
    let text = value.to_string();
    text.parse::<f64>()
        .map_err(|_| NormalizationError::invalid_number(field, text))
}

/// Raw token amount (not normalized for decimals)
///
/// This is the amount as the subgraph reports it, in the smallest unit of the
/// reserve (e.g. 1 USDC is `1000000`). Use [`normalize`](Self::normalize)
/// with the reserve's [`TokenDecimals`] to get the human-readable value.
///
/// # Examples
///
/// ```
/// use aavescan::{TokenAmount, TokenDecimals};
///
/// let amount = TokenAmount::parse("amount", "1500000000000000000").unwrap();
/// let normalized = amount.normalize(TokenDecimals::STANDARD).unwrap();
/// assert!((normalized.as_f64() - 1.5).abs() < 1e-12);
/// ```
///
/// Serializes as a base-10 string, the way the subgraph reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Parse a base-10 `BigInt` string, naming `field` in the error
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, NormalizationError> {
        parse_big_int(field, raw).map(Self)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// The raw integer as `f64` (no decimal scaling)
    pub fn to_f64(&self) -> Result<f64, NormalizationError> {
        u256_to_f64("amount", self.0)
    }

    /// Normalize by token decimals: `amount / 10^decimals`
    ///
    /// # Errors
    ///
    /// Fails with [`NormalizationError::UnsupportedDecimals`] when the decimals
    /// have no scale factor.
    ///
    /// # Examples
    ///
    /// ```
    /// use aavescan::{TokenAmount, TokenDecimals};
    ///
    /// // 100 USDC (6 decimals)
    /// let raw = TokenAmount::from(100_000_000u64);
    /// assert_eq!(raw.normalize(TokenDecimals::USDC).unwrap().as_f64(), 100.0);
    /// ```
    pub fn normalize(&self, decimals: TokenDecimals) -> Result<NormalizedAmount, NormalizationError> {
        let scale = decimals.scale()?;
        Ok(NormalizedAmount::new(self.to_f64()? / scale))
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}
