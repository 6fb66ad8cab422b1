//! Strong types for token-related values
//!
//! This module provides newtype wrappers for token operations
//! to add type safety and prevent mixing incompatible units.
//!
//! # Type Relationships
//!
//! ```text
//! TokenAmount (U256, raw)
//!     |
//!     | normalize(TokenDecimals)
//!     ↓
//! NormalizedAmount (f64, human-readable)
//!     |
//!     | × ReservePrice::usd_multiplier
//!     ↓
//! UsdValue (f64, USD-denominated)
//! ```

mod amount;
mod decimals;
mod normalized;
mod price;
mod usd;

pub(crate) use amount::{parse_big_int, u256_to_f64};
pub(crate) use price::parse_decimal;

pub use amount::TokenAmount;
pub use decimals::TokenDecimals;
pub use normalized::NormalizedAmount;
pub use price::ReservePrice;
pub use usd::UsdValue;
