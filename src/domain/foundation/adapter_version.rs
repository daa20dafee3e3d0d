//! Adapter version value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Version of this adapter as reported to the mediation host.
///
/// Format: `<host major>.<partner major>.<partner minor>.<partner patch>[.<partner build>].<adapter build>`,
/// so either 5 or 6 numeric components separated by periods.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AdapterVersion(String);

impl AdapterVersion {
    /// Parses and validates an adapter version string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::empty_field("adapter_version"));
        }

        let components: Vec<&str> = value.split('.').collect();
        if !(5..=6).contains(&components.len()) {
            return Err(ValidationError::invalid_format(
                "adapter_version",
                format!("expected 5 or 6 components, got {}", components.len()),
            ));
        }
        if let Some(bad) = components
            .iter()
            .find(|c| c.is_empty() || !c.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(ValidationError::invalid_format(
                "adapter_version",
                format!("component '{}' is not numeric", bad),
            ));
        }

        Ok(Self(value))
    }

    /// Wraps a version string known to be valid at compile time.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    /// Returns the version string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the mediation host major version this adapter targets.
    pub fn host_major(&self) -> u32 {
        self.0
            .split('.')
            .next()
            .and_then(|c| c.parse().ok())
            .unwrap_or_default()
    }

    /// Returns the adapter build number (last component).
    pub fn adapter_build(&self) -> u32 {
        self.0
            .rsplit('.')
            .next()
            .and_then(|c| c.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for AdapterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AdapterVersion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AdapterVersion {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<AdapterVersion> for String {
    fn from(version: AdapterVersion) -> Self {
        version.0
    }
}
