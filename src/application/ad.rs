//! TapjoyAd - One fullscreen ad bound to one partner placement.
//!
//! The ad wires the placement's callbacks into its `LifecycleReconciler` and
//! registers itself as the SDK's global video delegate while its content is
//! on screen. It is created per load request and never reused.

use std::sync::{Arc, Weak};

use tracing::info;

use crate::domain::foundation::{AdapterError, AdapterVersion, FullscreenFormat, LoadRequest, SessionId};
use crate::domain::lifecycle::{
    Completion, LifecycleReconciler, LoadError, PartnerError, RewardPayload, SessionStatus,
    ShowError,
};
use crate::ports::{
    PartnerAd, PartnerSdk, PlacementDelegate, PlacementHandle, PlacementSpec, SessionObserver,
    UiDispatcher, VideoAdDelegate, ViewHandle,
};

/// Fullscreen (interstitial or rewarded) Tapjoy ad.
pub struct TapjoyAd {
    this: Weak<TapjoyAd>,
    request: LoadRequest,
    format: FullscreenFormat,
    adapter_version: AdapterVersion,
    placement: Arc<dyn PlacementHandle>,
    reconciler: LifecycleReconciler,
    sdk: Arc<dyn PartnerSdk>,
    dispatcher: Arc<dyn UiDispatcher>,
}

/// Collaborators shared by every ad an adapter creates.
pub(crate) struct AdContext<'a> {
    pub sdk: &'a Arc<dyn PartnerSdk>,
    pub dispatcher: &'a Arc<dyn UiDispatcher>,
    pub mediation_agent: &'a str,
    pub adapter_version: &'a AdapterVersion,
}

impl TapjoyAd {
    /// Creates the partner placement and the ad that owns it.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::PlacementCreation` if the SDK refuses the placement.
    pub(crate) fn create(
        context: AdContext<'_>,
        request: LoadRequest,
        format: FullscreenFormat,
        observer: Weak<dyn SessionObserver>,
    ) -> Result<Arc<Self>, AdapterError> {
        let spec = PlacementSpec::new(request.partner_placement(), context.mediation_agent);
        let placement = context
            .sdk
            .create_placement(&spec)
            .ok_or_else(|| AdapterError::placement_creation(request.partner_placement()))?;

        let session_id = SessionId::new();
        info!(
            session_id = %session_id,
            placement = %request.partner_placement(),
            %format,
            "ad created"
        );

        Ok(Arc::new_cyclic(|this| Self {
            this: this.clone(),
            reconciler: LifecycleReconciler::new(session_id, request.partner_placement(), observer),
            request,
            format,
            adapter_version: context.adapter_version.clone(),
            placement,
            sdk: Arc::clone(context.sdk),
            dispatcher: Arc::clone(context.dispatcher),
        }))
    }

    pub fn format(&self) -> FullscreenFormat {
        self.format
    }

    pub fn status(&self) -> SessionStatus {
        self.reconciler.status()
    }
}

impl PartnerAd for TapjoyAd {
    fn session_id(&self) -> &SessionId {
        self.reconciler.session_id()
    }

    fn request(&self) -> &LoadRequest {
        &self.request
    }

    fn load(&self, completion: Completion<LoadError>) {
        if !self.reconciler.begin_load(completion) {
            return;
        }
        self.placement.set_adapter_version(self.adapter_version.as_str());
        let delegate: Weak<dyn PlacementDelegate> = self.this.clone();
        self.placement.set_delegate(delegate);
        self.placement.request_content();
    }

    fn show(&self, view: &ViewHandle, completion: Completion<ShowError>) {
        if !self.reconciler.begin_show(self.placement.readiness(), completion) {
            return;
        }
        let placement = Arc::clone(&self.placement);
        let view = view.clone();
        self.dispatcher
            .dispatch(Box::new(move || placement.show_content(&view)));
    }

    fn invalidate(&self) {
        self.reconciler.invalidate();
    }
}

impl PlacementDelegate for TapjoyAd {
    fn request_did_succeed(&self) {
        self.reconciler
            .on_request_succeeded(self.placement.readiness());
    }

    fn request_did_fail(&self, error: Option<PartnerError>) {
        self.reconciler.on_request_failed(error);
    }

    fn content_is_ready(&self) {
        self.reconciler.on_content_ready(self.placement.readiness());
    }

    fn content_did_appear(&self) {
        let delegate: Weak<dyn VideoAdDelegate> = self.this.clone();
        self.sdk.set_video_ad_delegate(Some(delegate));
        self.reconciler.on_content_appeared();
    }

    fn content_did_disappear(&self) {
        self.sdk.set_video_ad_delegate(None);
        self.reconciler.on_content_disappeared();
    }

    fn did_click(&self) {
        self.reconciler.on_click();
    }

    fn did_request_reward(&self, reward: RewardPayload) {
        self.reconciler.on_reward(reward);
    }

    fn video_did_complete(&self) {
        self.reconciler.on_reward(RewardPayload::default());
    }

    fn video_did_fail(&self, message: Option<String>) {
        self.reconciler.on_video_error(message);
    }
}

impl VideoAdDelegate for TapjoyAd {
    fn video_ad_error(&self, message: Option<String>) {
        self.reconciler.on_video_error(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryPartnerSdk, InMemoryPlacement, InlineDispatcher, RecordingObserver};
    use crate::domain::foundation::AdFormat;
    use crate::domain::lifecycle::Outcome;
    use std::sync::Mutex;

    const VERSION: &str = "4.13.0.0.0";

    struct Fixture {
        sdk: Arc<InMemoryPartnerSdk>,
        observer: Arc<RecordingObserver>,
        ad: Arc<TapjoyAd>,
    }

    impl Fixture {
        fn new() -> Self {
            let sdk = Arc::new(InMemoryPartnerSdk::new());
            let sdk_port: Arc<dyn PartnerSdk> = sdk.clone();
            let dispatcher: Arc<dyn UiDispatcher> = Arc::new(InlineDispatcher::new());
            let observer = Arc::new(RecordingObserver::new());
            let weak = Arc::downgrade(&observer) as Weak<dyn SessionObserver>;
            let version = AdapterVersion::from_static(VERSION);
            let request = LoadRequest::new("req-1", "level_complete", AdFormat::Rewarded).unwrap();

            let ad = TapjoyAd::create(
                AdContext {
                    sdk: &sdk_port,
                    dispatcher: &dispatcher,
                    mediation_agent: "chartboost",
                    adapter_version: &version,
                },
                request,
                FullscreenFormat::Rewarded,
                weak,
            )
            .unwrap();

            Self { sdk, observer, ad }
        }

        fn placement(&self) -> Arc<InMemoryPlacement> {
            self.sdk.last_placement().unwrap()
        }
    }

    fn recording<E: Send + 'static>() -> (Completion<E>, Arc<Mutex<Vec<Outcome<E>>>>) {
        let outcomes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&outcomes);
        (
            Completion::new(move |outcome| sink.lock().unwrap().push(outcome)),
            outcomes,
        )
    }

    #[test]
    fn create_builds_placement_for_chartboost_agent() {
        let fixture = Fixture::new();
        let placement = fixture.placement();

        assert_eq!(placement.spec().name, "level_complete");
        assert_eq!(placement.spec().mediation_agent, "chartboost");
        assert_eq!(placement.spec().mediation_id, None);
        assert_eq!(fixture.ad.status(), SessionStatus::Idle);
    }

    #[test]
    fn load_stamps_version_and_requests_content() {
        let fixture = Fixture::new();
        let (completion, outcomes) = recording::<LoadError>();

        fixture.ad.load(completion);

        let placement = fixture.placement();
        assert_eq!(placement.adapter_version().as_deref(), Some(VERSION));
        assert!(placement.has_delegate());
        assert_eq!(placement.request_count(), 1);
        assert!(outcomes.lock().unwrap().is_empty());

        placement.fill();
        assert!(matches!(outcomes.lock().unwrap().as_slice(), [Ok(_)]));
        assert_eq!(fixture.ad.status(), SessionStatus::Loaded);
    }

    #[test]
    fn second_load_does_not_request_again() {
        let fixture = Fixture::new();
        let (first, _) = recording::<LoadError>();
        let (second, outcomes) = recording::<LoadError>();

        fixture.ad.load(first);
        fixture.ad.load(second);

        assert_eq!(fixture.placement().request_count(), 1);
        assert!(matches!(
            outcomes.lock().unwrap().as_slice(),
            [Err(LoadError::InvalidState(SessionStatus::Loading))]
        ));
    }

    #[test]
    fn show_without_content_never_presents() {
        let fixture = Fixture::new();
        let (load, _) = recording::<LoadError>();
        fixture.ad.load(load);
        fixture.placement().fill();
        fixture.placement().set_content(false, true);

        let (show, outcomes) = recording::<ShowError>();
        fixture.ad.show(&ViewHandle::new("root"), show);

        assert!(fixture.placement().shown_views().is_empty());
        assert!(matches!(
            outcomes.lock().unwrap().as_slice(),
            [Err(ShowError::AdNotReady)]
        ));
    }

    #[test]
    fn appear_registers_video_delegate_until_disappear() {
        let fixture = Fixture::new();
        let (load, _) = recording::<LoadError>();
        fixture.ad.load(load);
        let placement = fixture.placement();
        placement.fill();

        let (show, outcomes) = recording::<ShowError>();
        fixture.ad.show(&ViewHandle::new("root"), show);
        assert_eq!(placement.shown_views(), vec![ViewHandle::new("root")]);

        placement.emit_content_appeared();
        assert!(fixture.sdk.has_video_delegate());
        assert!(matches!(outcomes.lock().unwrap().as_slice(), [Ok(_)]));

        placement.emit_content_disappeared();
        assert!(!fixture.sdk.has_video_delegate());
        assert_eq!(fixture.observer.dismiss_count(), 1);
    }

    #[test]
    fn global_video_error_fails_pending_show() {
        let fixture = Fixture::new();
        let (load, _) = recording::<LoadError>();
        fixture.ad.load(load);
        let placement = fixture.placement();
        placement.fill();
        let (show, outcomes) = recording::<ShowError>();
        fixture.ad.show(&ViewHandle::new("root"), show);

        placement.emit_video_failed(None);
        fixture.sdk.emit_video_ad_error(Some("late"));

        assert!(matches!(
            outcomes.lock().unwrap().as_slice(),
            [Err(ShowError::PartnerReported(reason))] if reason == "Unknown reason"
        ));
        assert_eq!(fixture.ad.status(), SessionStatus::ShowFailed);
    }

    #[test]
    fn video_completion_rewards_default_amount() {
        let fixture = Fixture::new();
        let (load, _) = recording::<LoadError>();
        fixture.ad.load(load);
        let placement = fixture.placement();
        placement.fill();
        let (show, _) = recording::<ShowError>();
        fixture.ad.show(&ViewHandle::new("root"), show);
        placement.emit_content_appeared();

        placement.emit_video_completed();

        let rewards = fixture.observer.rewards();
        assert_eq!(rewards.len(), 1);
        assert_eq!(rewards[0].amount, 1);
    }

    #[test]
    fn refused_placement_is_reported() {
        let sdk = Arc::new(InMemoryPartnerSdk::new());
        sdk.refuse_placements();
        let sdk_port: Arc<dyn PartnerSdk> = sdk;
        let dispatcher: Arc<dyn UiDispatcher> = Arc::new(InlineDispatcher::new());
        let observer = Arc::new(RecordingObserver::new());
        let weak = Arc::downgrade(&observer) as Weak<dyn SessionObserver>;
        let version = AdapterVersion::from_static(VERSION);

        let result = TapjoyAd::create(
            AdContext {
                sdk: &sdk_port,
                dispatcher: &dispatcher,
                mediation_agent: "chartboost",
                adapter_version: &version,
            },
            LoadRequest::new("req-1", "missing", AdFormat::Interstitial).unwrap(),
            FullscreenFormat::Interstitial,
            weak,
        );

        assert!(matches!(
            result,
            Err(AdapterError::PlacementCreation { placement }) if placement == "missing"
        ));
    }
}
