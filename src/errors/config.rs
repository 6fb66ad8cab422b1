//! Error types for configuration loading.

/// Errors that can occur when building a [`DashboardConfig`](crate::DashboardConfig)
/// from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An endpoint variable does not hold a valid URL.
    #[error("Invalid URL in {variable}: {value}")]
    InvalidUrl {
        /// Environment variable name
        variable: &'static str,
        /// The raw value
        value: String,
        /// The parse error
        #[source]
        source: url::ParseError,
    },

    /// The timeout variable is not a positive number of seconds.
    #[error("Invalid timeout in {variable}: {value}")]
    InvalidTimeout {
        /// Environment variable name
        variable: &'static str,
        /// The raw value
        value: String,
    },

    /// The output format is not one of `text` or `json`.
    #[error("Invalid output format '{value}' (expected 'text' or 'json')")]
    InvalidOutputFormat {
        /// The raw value
        value: String,
    },
}
