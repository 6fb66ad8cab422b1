//! Token decimal precision type and the scale table

use serde::{Deserialize, Serialize};

use crate::errors::NormalizationError;

/// Scale factors for every supported decimal count: `SCALE_TABLE[d] == 10^d`.
const SCALE_TABLE: [f64; 19] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18,
];

/// ERC-20 token decimal precision
///
/// Represents the number of decimal places a reserve's raw amounts are scaled
/// by. Aave V2 reserves use values between 2 (GUSD) and 18, so the supported
/// range is `0..=18`. Anything above that has no scale factor and is treated
/// as a data-integrity fault by [`scale`](Self::scale).
///
/// # Examples
///
/// ```
/// use aavescan::TokenDecimals;
///
/// assert_eq!(TokenDecimals::USDC.scale().unwrap(), 1_000_000.0);
/// assert!(TokenDecimals::new(19).scale().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Largest decimal count with a scale factor
    pub const MAX_SUPPORTED: u8 = 18;

    /// Standard decimals for ETH-like tokens (18)
    pub const STANDARD: Self = Self(18);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// WBTC decimals (8)
    pub const WBTC: Self = Self(8);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Look up the scale factor `10^decimals`
    ///
    /// # Errors
    ///
    /// Returns [`NormalizationError::UnsupportedDecimals`] when the decimal
    /// count is above [`MAX_SUPPORTED`](Self::MAX_SUPPORTED).
    pub fn scale(&self) -> Result<f64, NormalizationError> {
        SCALE_TABLE
            .get(usize::from(self.0))
            .copied()
            .ok_or(NormalizationError::UnsupportedDecimals {
                decimals: i64::from(self.0),
            })
    }
}

impl TryFrom<i64> for TokenDecimals {
    type Error = NormalizationError;

    /// Validate a decimal count as reported by the subgraph
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(decimals) if decimals <= Self::MAX_SUPPORTED => Ok(Self(decimals)),
            _ => Err(NormalizationError::UnsupportedDecimals { decimals: value }),
        }
    }
}

impl std::str::FromStr for TokenDecimals {
    type Err = NormalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| NormalizationError::invalid_number("decimals", s))?;
        Self::try_from(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
