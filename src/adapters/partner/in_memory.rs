//! In-memory partner SDK implementation for testing.
//!
//! Records every call the adapter makes and lets tests fire partner callbacks
//! on demand, so lifecycle flows run deterministically without the real SDK.
//!
//! # Security Note
//!
//! This adapter is for **testing only** and should not be used in production.
//! It uses `.expect()` on lock operations which will panic if locks are poisoned.

use std::sync::{Arc, Mutex, Weak};

use crate::domain::lifecycle::{PartnerError, RewardPayload};
use crate::ports::{
    ConnectionState, PartnerSdk, PlacementDelegate, PlacementHandle, PlacementSpec,
    PrivacyPolicy, VideoAdDelegate, ViewHandle,
};

/// How the fake SDK answers `connection_state` after `connect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectBehavior {
    /// Connected as soon as `connect` is called.
    Immediate,
    /// Connected once `connection_state` has been polled this many times.
    AfterPolls(u32),
    /// Reports `Failed` after `connect`.
    Fail,
    /// Stays `Pending` forever.
    Never,
}

struct SdkState {
    connect_behavior: ConnectBehavior,
    connect_key: Option<String>,
    polls: u32,
    sessions_started: usize,
    sessions_ended: usize,
    debug_enabled: Option<bool>,
    refuse_placements: bool,
    placements: Vec<Arc<InMemoryPlacement>>,
    video_delegate: Option<Weak<dyn VideoAdDelegate>>,
}

/// In-memory partner SDK for testing.
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. This is acceptable
/// for test code but this adapter should NOT be used in production.
///
/// # Example
///
/// ```ignore
/// let sdk = Arc::new(InMemoryPartnerSdk::new());
/// let adapter = TapjoyAdapter::new(sdk.clone(), Arc::new(InlineDispatcher), &config);
///
/// adapter.set_up(&configuration).await?;
/// assert_eq!(sdk.connect_key().as_deref(), Some("key"));
/// ```
pub struct InMemoryPartnerSdk {
    version: String,
    privacy: Arc<InMemoryPrivacyPolicy>,
    state: Mutex<SdkState>,
}

impl InMemoryPartnerSdk {
    pub const DEFAULT_VERSION: &'static str = "13.0.0";

    pub fn new() -> Self {
        Self::with_behavior(ConnectBehavior::Immediate)
    }

    pub fn with_behavior(connect_behavior: ConnectBehavior) -> Self {
        Self {
            version: Self::DEFAULT_VERSION.to_string(),
            privacy: Arc::new(InMemoryPrivacyPolicy::new()),
            state: Mutex::new(SdkState {
                connect_behavior,
                connect_key: None,
                polls: 0,
                sessions_started: 0,
                sessions_ended: 0,
                debug_enabled: None,
                refuse_placements: false,
                placements: Vec::new(),
                video_delegate: None,
            }),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, SdkState> {
        self.state
            .lock()
            .expect("InMemoryPartnerSdk: state lock poisoned")
    }

    // === Test Helpers ===

    /// Makes `create_placement` return `None`.
    pub fn refuse_placements(&self) {
        self.state().refuse_placements = true;
    }

    /// The key passed to `connect`, if it was called.
    pub fn connect_key(&self) -> Option<String> {
        self.state().connect_key.clone()
    }

    pub fn connection_polls(&self) -> u32 {
        self.state().polls
    }

    pub fn sessions_started(&self) -> usize {
        self.state().sessions_started
    }

    pub fn sessions_ended(&self) -> usize {
        self.state().sessions_ended
    }

    /// Last value passed to `set_debug_enabled`.
    pub fn debug_enabled(&self) -> Option<bool> {
        self.state().debug_enabled
    }

    /// Recording privacy policy shared by all callers.
    pub fn privacy(&self) -> Arc<InMemoryPrivacyPolicy> {
        Arc::clone(&self.privacy)
    }

    /// Placements created so far, oldest first.
    pub fn placements(&self) -> Vec<Arc<InMemoryPlacement>> {
        self.state().placements.clone()
    }

    pub fn last_placement(&self) -> Option<Arc<InMemoryPlacement>> {
        self.state().placements.last().cloned()
    }

    /// Whether a live global video delegate is registered.
    pub fn has_video_delegate(&self) -> bool {
        self.state()
            .video_delegate
            .as_ref()
            .is_some_and(|d| d.strong_count() > 0)
    }

    /// Fires the SDK-wide video error callback.
    pub fn emit_video_ad_error(&self, message: Option<&str>) {
        let delegate = self.state().video_delegate.clone();
        if let Some(delegate) = delegate.and_then(|d| d.upgrade()) {
            delegate.video_ad_error(message.map(str::to_string));
        }
    }
}

impl Default for InMemoryPartnerSdk {
    fn default() -> Self {
        Self::new()
    }
}

impl PartnerSdk for InMemoryPartnerSdk {
    fn version(&self) -> String {
        self.version.clone()
    }

    fn start_session(&self) {
        self.state().sessions_started += 1;
    }

    fn end_session(&self) {
        self.state().sessions_ended += 1;
    }

    fn connect(&self, sdk_key: &str) {
        self.state().connect_key = Some(sdk_key.to_string());
    }

    fn connection_state(&self) -> ConnectionState {
        let mut state = self.state();
        if state.connect_key.is_none() {
            return ConnectionState::Pending;
        }
        state.polls += 1;
        match state.connect_behavior {
            ConnectBehavior::Immediate => ConnectionState::Connected,
            ConnectBehavior::AfterPolls(n) if state.polls >= n => ConnectionState::Connected,
            ConnectBehavior::AfterPolls(_) | ConnectBehavior::Never => ConnectionState::Pending,
            ConnectBehavior::Fail => ConnectionState::Failed,
        }
    }

    fn set_debug_enabled(&self, enabled: bool) {
        self.state().debug_enabled = Some(enabled);
    }

    fn privacy_policy(&self) -> Arc<dyn PrivacyPolicy> {
        self.privacy.clone()
    }

    fn create_placement(&self, spec: &PlacementSpec) -> Option<Arc<dyn PlacementHandle>> {
        let mut state = self.state();
        if state.refuse_placements {
            return None;
        }
        let placement = Arc::new(InMemoryPlacement::new(spec.clone()));
        state.placements.push(Arc::clone(&placement));
        Some(placement)
    }

    fn set_video_ad_delegate(&self, delegate: Option<Weak<dyn VideoAdDelegate>>) {
        self.state().video_delegate = delegate;
    }
}

/// Privacy policy that records every value it is given.
#[derive(Debug, Default)]
pub struct InMemoryPrivacyPolicy {
    subject_to_gdpr: Mutex<Option<bool>>,
    user_consent: Mutex<Option<String>>,
    below_consent_age: Mutex<Option<bool>>,
    us_privacy: Mutex<Option<String>>,
}

impl InMemoryPrivacyPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject_to_gdpr(&self) -> Option<bool> {
        *self
            .subject_to_gdpr
            .lock()
            .expect("InMemoryPrivacyPolicy: gdpr lock poisoned")
    }

    pub fn user_consent(&self) -> Option<String> {
        self.user_consent
            .lock()
            .expect("InMemoryPrivacyPolicy: consent lock poisoned")
            .clone()
    }

    pub fn below_consent_age(&self) -> Option<bool> {
        *self
            .below_consent_age
            .lock()
            .expect("InMemoryPrivacyPolicy: consent age lock poisoned")
    }

    pub fn us_privacy(&self) -> Option<String> {
        self.us_privacy
            .lock()
            .expect("InMemoryPrivacyPolicy: us privacy lock poisoned")
            .clone()
    }
}

impl PrivacyPolicy for InMemoryPrivacyPolicy {
    fn set_subject_to_gdpr(&self, applies: bool) {
        *self
            .subject_to_gdpr
            .lock()
            .expect("InMemoryPrivacyPolicy: gdpr lock poisoned") = Some(applies);
    }

    fn set_user_consent(&self, consent: &str) {
        *self
            .user_consent
            .lock()
            .expect("InMemoryPrivacyPolicy: consent lock poisoned") = Some(consent.to_string());
    }

    fn set_below_consent_age(&self, below: bool) {
        *self
            .below_consent_age
            .lock()
            .expect("InMemoryPrivacyPolicy: consent age lock poisoned") = Some(below);
    }

    fn set_us_privacy(&self, privacy_string: &str) {
        *self
            .us_privacy
            .lock()
            .expect("InMemoryPrivacyPolicy: us privacy lock poisoned") =
            Some(privacy_string.to_string());
    }
}

#[derive(Default)]
struct PlacementState {
    delegate: Option<Weak<dyn PlacementDelegate>>,
    adapter_version: Option<String>,
    ready: bool,
    available: bool,
    requests: usize,
    shown_on: Vec<ViewHandle>,
}

/// In-memory placement whose content state and callbacks are driven by tests.
///
/// Callbacks are fired with no internal lock held, so delegates may query the
/// placement re-entrantly.
pub struct InMemoryPlacement {
    spec: PlacementSpec,
    state: Mutex<PlacementState>,
}

impl InMemoryPlacement {
    pub fn new(spec: PlacementSpec) -> Self {
        Self {
            spec,
            state: Mutex::new(PlacementState::default()),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, PlacementState> {
        self.state
            .lock()
            .expect("InMemoryPlacement: state lock poisoned")
    }

    fn delegate(&self) -> Option<Arc<dyn PlacementDelegate>> {
        self.state().delegate.as_ref().and_then(Weak::upgrade)
    }

    // === Test Helpers ===

    pub fn spec(&self) -> &PlacementSpec {
        &self.spec
    }

    pub fn set_content(&self, ready: bool, available: bool) {
        let mut state = self.state();
        state.ready = ready;
        state.available = available;
    }

    pub fn adapter_version(&self) -> Option<String> {
        self.state().adapter_version.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state().requests
    }

    pub fn shown_views(&self) -> Vec<ViewHandle> {
        self.state().shown_on.clone()
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate().is_some()
    }

    /// Marks content ready and available, then reports request success.
    pub fn fill(&self) {
        self.set_content(true, true);
        self.emit_request_succeeded();
    }

    pub fn emit_request_succeeded(&self) {
        if let Some(delegate) = self.delegate() {
            delegate.request_did_succeed();
        }
    }

    pub fn emit_request_failed(&self, error: Option<PartnerError>) {
        if let Some(delegate) = self.delegate() {
            delegate.request_did_fail(error);
        }
    }

    pub fn emit_content_ready(&self) {
        if let Some(delegate) = self.delegate() {
            delegate.content_is_ready();
        }
    }

    pub fn emit_content_appeared(&self) {
        if let Some(delegate) = self.delegate() {
            delegate.content_did_appear();
        }
    }

    pub fn emit_content_disappeared(&self) {
        if let Some(delegate) = self.delegate() {
            delegate.content_did_disappear();
        }
    }

    pub fn emit_click(&self) {
        if let Some(delegate) = self.delegate() {
            delegate.did_click();
        }
    }

    pub fn emit_reward(&self, reward: RewardPayload) {
        if let Some(delegate) = self.delegate() {
            delegate.did_request_reward(reward);
        }
    }

    pub fn emit_video_completed(&self) {
        if let Some(delegate) = self.delegate() {
            delegate.video_did_complete();
        }
    }

    pub fn emit_video_failed(&self, message: Option<&str>) {
        if let Some(delegate) = self.delegate() {
            delegate.video_did_fail(message.map(str::to_string));
        }
    }
}

impl PlacementHandle for InMemoryPlacement {
    fn name(&self) -> String {
        self.spec.name.clone()
    }

    fn set_delegate(&self, delegate: Weak<dyn PlacementDelegate>) {
        self.state().delegate = Some(delegate);
    }

    fn set_adapter_version(&self, version: &str) {
        self.state().adapter_version = Some(version.to_string());
    }

    fn request_content(&self) {
        self.state().requests += 1;
    }

    fn show_content(&self, view: &ViewHandle) {
        self.state().shown_on.push(view.clone());
    }

    fn is_content_ready(&self) -> bool {
        self.state().ready
    }

    fn is_content_available(&self) -> bool {
        self.state().available
    }
}
