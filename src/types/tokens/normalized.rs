//! Normalized (human-readable) token amount type

use serde::{Deserialize, Serialize};

use super::usd::UsdValue;

const MILLION: f64 = 1e6;
const BILLION: f64 = 1e9;

/// Token amount normalized by decimals (human-readable)
///
/// This represents a token amount after dividing by 10^decimals.
/// For example, 1.5 WETH (not 1.5e18), or 100.25 USDC (not 100250000).
///
/// # Invariant
///
/// Normalized amounts are always non-negative; negative inputs are clamped to
/// zero on creation.
///
/// # Examples
///
/// ```
/// use aavescan::{NormalizedAmount, UsdValue};
///
/// let amount = NormalizedAmount::new(1.5);
/// assert_eq!(amount.to_usd(2000.0), UsdValue::new(3000.0));
/// assert_eq!(NormalizedAmount::new(-5.0).as_f64(), 0.0);
/// assert_eq!(NormalizedAmount::new(2_500_000.0).in_millions(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedAmount(f64);

impl NormalizedAmount {
    /// Zero normalized amount
    pub const ZERO: Self = Self(0.0);

    /// Create a new normalized amount, clamping negative values to zero
    pub fn new(amount: f64) -> Self {
        Self(amount.max(0.0))
    }

    /// Get the inner f64 value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// The amount expressed in millions of tokens
    pub fn in_millions(&self) -> f64 {
        self.0 / MILLION
    }

    /// The amount expressed in billions of tokens
    pub fn in_billions(&self) -> f64 {
        self.0 / BILLION
    }

    /// Calculate value in USD given price per token
    pub fn to_usd(&self, price_per_token: f64) -> UsdValue {
        UsdValue::new(self.0 * price_per_token)
    }
}

impl From<f64> for NormalizedAmount {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for NormalizedAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
