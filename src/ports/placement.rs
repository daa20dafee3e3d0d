//! Placement ports - One partner ad opportunity and its callbacks.

use std::fmt;
use std::sync::Weak;

use crate::domain::lifecycle::{ContentReadiness, PartnerError, RewardPayload};

/// Parameters used to construct a partner placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementSpec {
    pub name: String,
    pub mediation_agent: String,
    pub mediation_id: Option<String>,
}

impl PlacementSpec {
    pub fn new(name: impl Into<String>, mediation_agent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mediation_agent: mediation_agent.into(),
            mediation_id: None,
        }
    }
}

/// Opaque reference to the on-screen surface an ad is presented from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewHandle(String);

impl ViewHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Port for a partner placement handle.
///
/// Events for the placement are delivered to the registered delegate, which
/// is held weakly so the handle never keeps a session alive.
pub trait PlacementHandle: Send + Sync {
    fn name(&self) -> String;

    fn set_delegate(&self, delegate: Weak<dyn PlacementDelegate>);

    fn set_adapter_version(&self, version: &str);

    /// Starts fetching content. Completion is reported through the delegate.
    fn request_content(&self);

    /// Presents fetched content. Must be called on the UI context.
    fn show_content(&self, view: &ViewHandle);

    fn is_content_ready(&self) -> bool;

    fn is_content_available(&self) -> bool;

    fn readiness(&self) -> ContentReadiness {
        ContentReadiness::new(self.is_content_ready(), self.is_content_available())
    }
}

/// Callbacks a placement fires during its lifecycle.
pub trait PlacementDelegate: Send + Sync {
    fn request_did_succeed(&self);

    fn request_did_fail(&self, error: Option<PartnerError>);

    fn content_is_ready(&self);

    fn content_did_appear(&self);

    fn content_did_disappear(&self);

    fn did_click(&self);

    fn did_request_reward(&self, reward: RewardPayload);

    fn video_did_complete(&self);

    fn video_did_fail(&self, message: Option<String>);
}

/// SDK-wide video error callback.
pub trait VideoAdDelegate: Send + Sync {
    fn video_ad_error(&self, message: Option<String>);
}
