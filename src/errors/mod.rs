//! Error types for the aavescan library.
//!
//! Errors follow the same split as the data flow:
//!
//! - [`NormalizationError`] - one record could not be normalized; the record is
//!   skipped and logged
//! - [`FetchError`] - one subgraph query failed; its dashboard section stays empty
//! - [`ConfigError`] - the configuration could not be built
//!
//! [`AavescanError`] unifies them for callers that do not need to tell the
//! sources apart.
//!
//! # Examples
//!
//! ```rust,no_run
//! use aavescan::{AavescanError, Dashboard, DashboardConfig};
//!
//! async fn example() -> Result<(), AavescanError> {
//!     let config = DashboardConfig::from_env()?;
//!     let snapshot = Dashboard::http(&config)?.load().await;
//!     for failure in &snapshot.failures {
//!         eprintln!("{} failed: {}", failure.query, failure.message);
//!     }
//!     Ok(())
//! }
//! ```

mod config;
mod fetch;
mod normalize;

pub use config::ConfigError;
pub use fetch::FetchError;
pub use normalize::NormalizationError;

/// Unified error type for all aavescan operations.
#[derive(Debug, thiserror::Error)]
pub enum AavescanError {
    /// Error from record normalization.
    #[error("Normalization error: {0}")]
    Normalization(#[from] NormalizationError),

    /// Error from a subgraph query.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error from configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_keep_the_message() {
        let err: AavescanError = NormalizationError::missing_field("decimals").into();
        assert!(matches!(err, AavescanError::Normalization(_)));
        assert_eq!(err.to_string(), "Normalization error: Missing field: decimals");

        let err: AavescanError = ConfigError::InvalidOutputFormat {
            value: "yaml".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Configuration error: "));
    }
}
