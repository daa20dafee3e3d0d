//! Partner SDK configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for the SDK connect wait.
pub const MAX_CONNECT_TIMEOUT_SECS: u64 = 60;

/// Partner SDK connection and placement settings
#[derive(Debug, Clone, Deserialize)]
pub struct PartnerConfig {
    /// How long setup waits for the SDK to connect
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// How often setup checks the connection state
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Mediation agent name stamped on every placement
    #[serde(default = "default_mediation_agent")]
    pub mediation_agent: String,
}

impl PartnerConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Validate partner configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.connect_timeout_secs == 0 || self.connect_timeout_secs > MAX_CONNECT_TIMEOUT_SECS {
            return Err(ValidationError::InvalidConnectTimeout);
        }
        if self.poll_interval_ms == 0 || self.poll_interval() > self.connect_timeout() {
            return Err(ValidationError::InvalidPollInterval);
        }
        if self.mediation_agent.trim().is_empty() {
            return Err(ValidationError::MissingRequired("MEDIATION_AGENT"));
        }
        Ok(())
    }
}

impl Default for PartnerConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout(),
            poll_interval_ms: default_poll_interval(),
            mediation_agent: default_mediation_agent(),
        }
    }
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_poll_interval() -> u64 {
    1000
}

fn default_mediation_agent() -> String {
    "chartboost".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_config_defaults() {
        let config = PartnerConfig::default();
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.mediation_agent, "chartboost");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = PartnerConfig {
            connect_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidConnectTimeout));
    }

    #[test]
    fn test_excessive_timeout_rejected() {
        let config = PartnerConfig {
            connect_timeout_secs: 61,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidConnectTimeout));
    }

    #[test]
    fn test_poll_interval_longer_than_timeout_rejected() {
        let config = PartnerConfig {
            connect_timeout_secs: 2,
            poll_interval_ms: 2500,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPollInterval));
    }

    #[test]
    fn test_blank_mediation_agent_rejected() {
        let config = PartnerConfig {
            mediation_agent: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("MEDIATION_AGENT"))
        );
    }
}
