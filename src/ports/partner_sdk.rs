//! PartnerSdk port - Interface to the Tapjoy SDK's global entry points.
//!
//! The real SDK is a proprietary binary; this trait captures the slice of it
//! the adapter needs. Adapters implement it over FFI or, for tests, in memory.

use std::sync::{Arc, Weak};

use super::{PlacementHandle, PlacementSpec, VideoAdDelegate};

/// Connection progress reported by the partner SDK after `connect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Pending,
    Connected,
    Failed,
}

/// Port for the partner SDK's global functions.
///
/// Implementations must be callable from any thread.
pub trait PartnerSdk: Send + Sync {
    /// SDK version string.
    fn version(&self) -> String;

    fn start_session(&self);

    fn end_session(&self);

    /// Begins connecting with the given SDK key. Progress is observed through
    /// `connection_state`.
    fn connect(&self, sdk_key: &str);

    fn connection_state(&self) -> ConnectionState;

    fn set_debug_enabled(&self, enabled: bool);

    /// The SDK-wide privacy policy object.
    fn privacy_policy(&self) -> Arc<dyn PrivacyPolicy>;

    /// Creates a placement, or `None` when the SDK refuses the spec.
    fn create_placement(&self, spec: &PlacementSpec) -> Option<Arc<dyn PlacementHandle>>;

    /// Registers (or clears) the global video ad delegate.
    fn set_video_ad_delegate(&self, delegate: Option<Weak<dyn VideoAdDelegate>>);
}

/// Port for the partner SDK's privacy policy object.
pub trait PrivacyPolicy: Send + Sync {
    fn set_subject_to_gdpr(&self, applies: bool);

    /// `"1"` when consent was granted, `"0"` when denied.
    fn set_user_consent(&self, consent: &str);

    fn set_below_consent_age(&self, below: bool);

    /// IAB US privacy string.
    fn set_us_privacy(&self, privacy_string: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn PartnerSdk, _: &dyn PrivacyPolicy) {}

    #[test]
    fn connection_starts_pending() {
        assert_eq!(ConnectionState::default(), ConnectionState::Pending);
    }
}
