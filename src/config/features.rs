//! Feature flags configuration

use serde::Deserialize;

/// Publisher-facing partner SDK switches
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Enable the partner's test mode
    #[serde(default)]
    pub test_mode: bool,

    /// Enable the partner's verbose logging
    #[serde(default)]
    pub verbose_logging: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(!flags.test_mode);
        assert!(!flags.verbose_logging);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{ "verbose_logging": true }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.test_mode);
        assert!(flags.verbose_logging);
    }
}
