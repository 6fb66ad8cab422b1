// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Ray-scaled interest rates
//!
//! Aave stores every rate as a fixed-point integer scaled by 10^27 (a "ray").
//! A ray of `1e27` is a rate of 1.0, i.e. 100%.

use alloy_primitives::U256;

use crate::errors::NormalizationError;
use crate::types::tokens::{parse_big_int, u256_to_f64};

/// Divisor that turns a ray into a percentage: `1e27 / 100`
pub const RAY_PERCENT_DIVISOR: f64 = 1e25;

/// An interest rate in ray units (10^27 fixed point)
///
/// # Examples
///
/// ```
/// use aavescan::RayRate;
///
/// // 3.5% APY
/// let rate = RayRate::parse("liquidityRate", "35000000000000000000000000").unwrap();
/// assert!((rate.as_percent().unwrap() - 3.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RayRate(U256);

impl RayRate {
    /// Zero rate
    pub const ZERO: Self = Self(U256::ZERO);

    /// Parse a base-10 ray string, naming `field` in the error
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, NormalizationError> {
        parse_big_int(field, raw).map(Self)
    }

    /// The rate as a percentage: `ray / 1e25`
    pub fn as_percent(&self) -> Result<f64, NormalizationError> {
        Ok(u256_to_f64("rate", self.0)? / RAY_PERCENT_DIVISOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_ray_is_one_hundred_percent() {
        let rate = RayRate::parse("variableBorrowRate", "1000000000000000000000000000").unwrap();
        assert!((rate.as_percent().unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(RayRate::ZERO.as_percent().unwrap(), 0.0);
        assert_eq!(RayRate::parse("stableBorrowRate", "0").unwrap(), RayRate::ZERO);
    }

    #[test]
    fn test_invalid_rate() {
        assert_eq!(
            RayRate::parse("liquidityRate", "0.03"),
            Err(NormalizationError::invalid_number("liquidityRate", "0.03"))
        );
    }
}
