//! Adapter configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TAPJOY_ADAPTER` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use tapjoy_adapter::config::AdapterConfig;
//!
//! let config = AdapterConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Connect timeout: {:?}", config.partner.connect_timeout());
//! ```

mod error;
mod features;
mod partner;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use partner::{PartnerConfig, MAX_CONNECT_TIMEOUT_SECS};
pub use telemetry::{LogFormat, TelemetryConfig};

use serde::Deserialize;

/// Root adapter configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdapterConfig {
    /// Partner SDK settings (connect wait, mediation agent)
    #[serde(default)]
    pub partner: PartnerConfig,

    /// Partner SDK switches (test mode, verbose logging)
    #[serde(default)]
    pub features: FeatureFlags,

    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AdapterConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TAPJOY_ADAPTER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TAPJOY_ADAPTER__PARTNER__CONNECT_TIMEOUT_SECS=10` -> `partner.connect_timeout_secs = 10`
    /// - `TAPJOY_ADAPTER__FEATURES__TEST_MODE=true` -> `features.test_mode = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TAPJOY_ADAPTER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.partner.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
