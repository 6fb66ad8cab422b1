//! Error types for record normalization.
//!
//! A [`NormalizationError`] describes why a single fetched record could not be
//! turned into its human-readable form. These errors are reported per record:
//! the offending record is skipped and logged, the rest of the list survives.

/// Errors that can occur while normalizing a single subgraph record.
///
/// # Examples
///
/// ```rust
/// use aavescan::{NormalizationError, TokenDecimals};
///
/// match TokenDecimals::new(24).scale() {
///     Err(NormalizationError::UnsupportedDecimals { decimals }) => assert_eq!(decimals, 24),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizationError {
    /// The reserve reports a decimal count outside the supported scale table.
    ///
    /// Only 0 through 18 decimals have a scale factor. Anything else is a
    /// data-integrity fault in the source and is never coerced.
    #[error("Unsupported token decimals: {decimals} (supported range is 0-18)")]
    UnsupportedDecimals {
        /// The decimal count found on the record
        decimals: i64,
    },

    /// A field required for normalization is absent.
    #[error("Missing field: {field}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// A numeric field could not be parsed.
    #[error("Invalid number in field '{field}': {value}")]
    InvalidNumber {
        /// Name of the field that failed to parse
        field: &'static str,
        /// The raw value as received
        value: String,
    },

    /// A derived value came out as NaN or infinity.
    ///
    /// The usual cause is a zero ETH/USD oracle price, whose reciprocal is
    /// used to convert ETH-denominated prices into USD.
    #[error("Non-finite value computed for '{field}'")]
    NonFiniteValue {
        /// Name of the derived field
        field: &'static str,
    },

    /// A record id that must be an Ethereum address is not one.
    #[error("Invalid address: {value}")]
    InvalidAddress {
        /// The raw value as received
        value: String,
    },
}

impl NormalizationError {
    /// Create an `InvalidNumber` error for a field.
    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        NormalizationError::InvalidNumber {
            field,
            value: value.into(),
        }
    }

    /// Create a `MissingField` error.
    pub fn missing_field(field: &'static str) -> Self {
        NormalizationError::MissingField { field }
    }

    /// Create a `NonFiniteValue` error for a derived field.
    pub fn non_finite(field: &'static str) -> Self {
        NormalizationError::NonFiniteValue { field }
    }
}
