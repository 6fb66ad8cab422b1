//! USD value type for reserve valuations

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Represents a USD-denominated value
///
/// Keeps USD valuations apart from token amounts and percentages. Reserve
/// valuations are carried in display units (millions or billions of USD), the
/// unit is tracked by the field name rather than the type.
///
/// # Examples
///
/// ```
/// use aavescan::UsdValue;
///
/// let value = UsdValue::new(10_000.0);
/// assert_eq!(value.format(6), "$10000.000000");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsdValue(f64);

impl UsdValue {
    /// Zero USD value
    pub const ZERO: Self = Self(0.0);

    /// Create a new USD value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the inner f64 value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Check if the value is neither NaN nor infinite
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Format as USD string with specified precision
    pub fn format(&self, precision: usize) -> String {
        format!("${:.precision$}", self.0, precision = precision)
    }

    /// Total ordering, used for sorting valuations
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for UsdValue {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for UsdValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::iter::Sum for UsdValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for UsdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
