//! Consent values and the partner settings they translate to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The user's GDPR consent status as determined by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GdprConsentStatus {
    #[default]
    Unknown,
    Denied,
    Granted,
}

impl GdprConsentStatus {
    /// Partner user-consent string, `None` when the status is unknown.
    pub fn user_consent(&self) -> Option<&'static str> {
        match self {
            GdprConsentStatus::Unknown => None,
            GdprConsentStatus::Denied => Some("0"),
            GdprConsentStatus::Granted => Some("1"),
        }
    }
}

/// One forwarded privacy setting on the partner policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivacySetting {
    SubjectToGdpr(bool),
    UserConsent(String),
    BelowConsentAge(bool),
    UsPrivacy(String),
}

impl PrivacySetting {
    /// Builds the GDPR settings to forward.
    pub fn for_gdpr(applies: Option<bool>, status: GdprConsentStatus) -> Vec<Self> {
        let mut settings = Vec::new();
        if let Some(applies) = applies {
            settings.push(PrivacySetting::SubjectToGdpr(applies));
        }
        if let Some(consent) = status.user_consent() {
            settings.push(PrivacySetting::UserConsent(consent.to_string()));
        }
        settings
    }

    /// Builds the CCPA setting to forward. Blank strings are not forwarded;
    /// anything else is passed through untouched.
    pub fn for_ccpa(privacy_string: Option<&str>) -> Option<Self> {
        privacy_string
            .filter(|s| !s.trim().is_empty())
            .map(|s| PrivacySetting::UsPrivacy(s.to_string()))
    }

    /// Partner setter name, as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            PrivacySetting::SubjectToGdpr(_) => "setSubjectToGDPR",
            PrivacySetting::UserConsent(_) => "userConsent",
            PrivacySetting::BelowConsentAge(_) => "setBelowConsentAge",
            PrivacySetting::UsPrivacy(_) => "setUSPrivacy",
        }
    }
}

impl fmt::Display for PrivacySetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivacySetting::SubjectToGdpr(v) | PrivacySetting::BelowConsentAge(v) => {
                write!(f, "{}={}", self.name(), v)
            }
            PrivacySetting::UserConsent(v) | PrivacySetting::UsPrivacy(v) => {
                write!(f, "{}={}", self.name(), v)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_forwards_nothing() {
        assert!(PrivacySetting::for_gdpr(None, GdprConsentStatus::Unknown).is_empty());
    }

    #[test]
    fn applies_and_granted_forward_both() {
        assert_eq!(
            PrivacySetting::for_gdpr(Some(true), GdprConsentStatus::Granted),
            vec![
                PrivacySetting::SubjectToGdpr(true),
                PrivacySetting::UserConsent("1".to_string())
            ]
        );
    }

    #[test]
    fn denied_without_applies_forwards_consent_only() {
        assert_eq!(
            PrivacySetting::for_gdpr(None, GdprConsentStatus::Denied),
            vec![PrivacySetting::UserConsent("0".to_string())]
        );
    }

    #[test]
    fn ccpa_string_is_forwarded_verbatim() {
        assert_eq!(
            PrivacySetting::for_ccpa(Some("1YN-")),
            Some(PrivacySetting::UsPrivacy("1YN-".to_string()))
        );
        assert_eq!(
            PrivacySetting::for_ccpa(Some(" 1YN- ")),
            Some(PrivacySetting::UsPrivacy(" 1YN- ".to_string()))
        );
    }

    #[test]
    fn blank_ccpa_string_is_dropped() {
        assert_eq!(PrivacySetting::for_ccpa(None), None);
        assert_eq!(PrivacySetting::for_ccpa(Some("")), None);
        assert_eq!(PrivacySetting::for_ccpa(Some(" \t ")), None);
    }

    #[test]
    fn display_includes_setter_name() {
        assert_eq!(
            PrivacySetting::BelowConsentAge(true).to_string(),
            "setBelowConsentAge=true"
        );
    }
}
