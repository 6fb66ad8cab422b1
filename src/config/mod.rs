//! Configuration for aavescan
//!
//! Controls which subgraphs are queried, how long each query may take, and
//! how the dashboard is printed.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use aavescan::DashboardConfig;
//!
//! let config = DashboardConfig::default();
//! assert_eq!(config.request_timeout.as_secs(), 30);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use aavescan::{DashboardConfigBuilder, OutputFormat};
//! use std::time::Duration;
//!
//! let config = DashboardConfigBuilder::new()
//!     .request_timeout(Duration::from_secs(10))
//!     .output(OutputFormat::Json)
//!     .build();
//! assert_eq!(config.output, OutputFormat::Json);
//! ```

use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::errors::ConfigError;

pub mod constants;

use constants::{endpoints, env, DEFAULT_TIMEOUT_SECS};

/// How the binary prints a dashboard snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable sections
    #[default]
    Text,
    /// The snapshot as pretty-printed JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidOutputFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration for a dashboard load
///
/// Use [`DashboardConfigBuilder`] for a fluent API or
/// [`DashboardConfig::from_env`] to read overrides from the environment.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Lending-protocol subgraph (reserve and activity queries)
    pub lending_endpoint: Url,

    /// Governance subgraph (proposal query)
    pub governance_endpoint: Url,

    /// Upper bound on each individual query
    /// Default: 30 seconds
    pub request_timeout: Duration,

    /// Output format for the binary
    pub output: OutputFormat,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            lending_endpoint: default_url(endpoints::LENDING_SUBGRAPH),
            governance_endpoint: default_url(endpoints::GOVERNANCE_SUBGRAPH),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            output: OutputFormat::Text,
        }
    }
}

// The default endpoints are compile-time constants covered by a unit test.
fn default_url(raw: &str) -> Url {
    Url::parse(raw).unwrap_or_else(|e| panic!("invalid built-in endpoint {raw}: {e}"))
}

impl DashboardConfig {
    /// Build a configuration from environment variables (and `.env`)
    ///
    /// Unset variables fall back to the defaults. See
    /// [`constants::env`] for the variable names.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    ///
    /// # Example
    ///
    /// ```rust
    /// use aavescan::DashboardConfig;
    ///
    /// let config = DashboardConfig::from_lookup(|name| match name {
    ///     "AAVESCAN_TIMEOUT_SECS" => Some("5".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.request_timeout.as_secs(), 5);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = DashboardConfigBuilder::new();

        if let Some(raw) = lookup(env::LENDING_URL) {
            builder = builder.lending_endpoint(parse_url(env::LENDING_URL, raw)?);
        }
        if let Some(raw) = lookup(env::GOVERNANCE_URL) {
            builder = builder.governance_endpoint(parse_url(env::GOVERNANCE_URL, raw)?);
        }
        if let Some(raw) = lookup(env::TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout {
                    variable: env::TIMEOUT_SECS,
                    value: raw.clone(),
                })?;
            builder = builder.request_timeout(Duration::from_secs(secs));
        }
        if let Some(raw) = lookup(env::OUTPUT) {
            builder = builder.output(raw.parse()?);
        }

        Ok(builder.build())
    }
}

fn parse_url(variable: &'static str, raw: String) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
        variable,
        value: raw,
        source,
    })
}

/// Builder for [`DashboardConfig`]
#[derive(Debug, Default)]
pub struct DashboardConfigBuilder {
    config: DashboardConfig,
}

impl DashboardConfigBuilder {
    /// Create a new builder starting from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lending subgraph endpoint
    pub fn lending_endpoint(mut self, url: Url) -> Self {
        self.config.lending_endpoint = url;
        self
    }

    /// Set the governance subgraph endpoint
    pub fn governance_endpoint(mut self, url: Url) -> Self {
        self.config.governance_endpoint = url;
        self
    }

    /// Set the per-query timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the output format
    pub fn output(mut self, output: OutputFormat) -> Self {
        self.config.output = output;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> DashboardConfig {
        self.config
    }
}
