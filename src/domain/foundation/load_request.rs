//! Requests handed to the adapter by the mediation host.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{AdFormat, ValidationError};

/// Information about one ad load, fixed when the host creates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRequest {
    identifier: String,
    partner_placement: String,
    format: AdFormat,
    #[serde(default)]
    partner_settings: HashMap<String, String>,
}

impl LoadRequest {
    /// Creates a load request.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the partner placement is empty
    pub fn new(
        identifier: impl Into<String>,
        partner_placement: impl Into<String>,
        format: AdFormat,
    ) -> Result<Self, ValidationError> {
        let partner_placement = partner_placement.into();
        if partner_placement.trim().is_empty() {
            return Err(ValidationError::empty_field("partner_placement"));
        }
        Ok(Self {
            identifier: identifier.into(),
            partner_placement,
            format,
            partner_settings: HashMap::new(),
        })
    }

    /// Attaches partner-specific load parameters.
    pub fn with_partner_settings(mut self, settings: HashMap<String, String>) -> Self {
        self.partner_settings = settings;
        self
    }

    /// Host-assigned identifier of this request.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Partner placement name.
    pub fn partner_placement(&self) -> &str {
        &self.partner_placement
    }

    pub fn format(&self) -> AdFormat {
        self.format
    }

    pub fn partner_settings(&self) -> &HashMap<String, String> {
        &self.partner_settings
    }
}

/// Information about an upcoming auction, passed when fetching bidder info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreBidRequest {
    pub chartboost_placement: String,
    pub format: AdFormat,
}

/// Bidding tokens a partner contributes to an auction.
pub type BidderInfo = HashMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_has_no_partner_settings() {
        let request = LoadRequest::new("req-1", "level_complete", AdFormat::Rewarded).unwrap();
        assert_eq!(request.identifier(), "req-1");
        assert_eq!(request.partner_placement(), "level_complete");
        assert_eq!(request.format(), AdFormat::Rewarded);
        assert!(request.partner_settings().is_empty());
    }

    #[test]
    fn blank_placement_is_rejected() {
        assert_eq!(
            LoadRequest::new("req-1", "   ", AdFormat::Interstitial),
            Err(ValidationError::empty_field("partner_placement"))
        );
    }

    #[test]
    fn partner_settings_are_attached() {
        let settings = HashMap::from([("floor".to_string(), "0.5".to_string())]);
        let request = LoadRequest::new("req-1", "p", AdFormat::Interstitial)
            .unwrap()
            .with_partner_settings(settings.clone());
        assert_eq!(request.partner_settings(), &settings);
    }
}
