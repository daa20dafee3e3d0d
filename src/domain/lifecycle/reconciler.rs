//! Lifecycle reconciler - turns raw partner events into exactly-once outcomes.
//!
//! The partner SDK may double-fire callbacks or deliver them in an order that
//! no longer matches the session state. The reconciler owns the two
//! completion slots of a session and the session status; every partner event
//! either resolves an armed slot, advances the status, is forwarded to the
//! session observer, or is absorbed with a log line.
//!
//! All methods take `&self` and may be called from whichever thread the
//! partner SDK delivers on. State lives behind a single mutex; completions and
//! observer calls always run after the lock is released.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::{debug, info, warn};

use super::{
    Completion, CompletionSlot, ContentReadiness, EventDetails, LoadError, Outcome, PartnerError,
    Reward, RewardPayload, SessionStatus, ShowError,
};
use crate::domain::foundation::{SessionId, StateMachine};
use crate::ports::SessionObserver;

const UNKNOWN_VIDEO_ERROR: &str = "Unknown reason";

struct ReconcilerState {
    status: SessionStatus,
    load: CompletionSlot<LoadError>,
    show: CompletionSlot<ShowError>,
    observer: Option<Weak<dyn SessionObserver>>,
    invalidated: bool,
}

impl ReconcilerState {
    fn observer(&self) -> Option<Arc<dyn SessionObserver>> {
        self.observer.as_ref().and_then(Weak::upgrade)
    }
}

/// Per-session lifecycle reconciler.
///
/// # Invariants
///
/// - Each armed completion fires at most once
/// - The load slot is only armed while `Loading`, the show slot only while `Showing`
/// - The observer is never owned; an absent observer is logged, not an error
pub struct LifecycleReconciler {
    session_id: SessionId,
    placement: String,
    state: Mutex<ReconcilerState>,
}

impl LifecycleReconciler {
    pub fn new(
        session_id: SessionId,
        placement: impl Into<String>,
        observer: Weak<dyn SessionObserver>,
    ) -> Self {
        Self {
            session_id,
            placement: placement.into(),
            state: Mutex::new(ReconcilerState {
                status: SessionStatus::Idle,
                load: CompletionSlot::new("load"),
                show: CompletionSlot::new("show"),
                observer: Some(observer),
                invalidated: false,
            }),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn placement(&self) -> &str {
        &self.placement
    }

    pub fn status(&self) -> SessionStatus {
        self.lock().status
    }

    pub fn is_invalidated(&self) -> bool {
        self.lock().invalidated
    }

    fn lock(&self) -> MutexGuard<'_, ReconcilerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Load
    // ─────────────────────────────────────────────────────────────────────────

    /// Arms the load slot.
    ///
    /// Returns `true` when the caller should ask the partner for content. On
    /// `false` the completion has already been resolved with
    /// `LoadError::InvalidState`.
    pub fn begin_load(&self, completion: Completion<LoadError>) -> bool {
        let mut state = self.lock();
        let status = state.status;

        let rejected = if status.can_transition_to(&SessionStatus::Loading) {
            match state.load.arm(completion) {
                Ok(()) => {
                    state.status = SessionStatus::Loading;
                    None
                }
                Err(completion) => Some(completion),
            }
        } else {
            Some(completion)
        };
        drop(state);

        match rejected {
            None => {
                info!(
                    session_id = %self.session_id,
                    placement = %self.placement,
                    "load started"
                );
                true
            }
            Some(completion) => {
                warn!(
                    session_id = %self.session_id,
                    placement = %self.placement,
                    %status,
                    "load rejected: session is single-use"
                );
                completion.complete(Err(LoadError::InvalidState(status)));
                false
            }
        }
    }

    /// The partner finished the content request.
    pub fn on_request_succeeded(&self, readiness: ContentReadiness) {
        if !readiness.available {
            self.resolve_load(Err(LoadError::ContentUnavailable));
        } else if readiness.ready {
            self.resolve_load(Ok(EventDetails::new()));
        } else {
            debug!(
                session_id = %self.session_id,
                placement = %self.placement,
                "content available but not ready; waiting for content-ready"
            );
        }
    }

    /// The partner failed the content request.
    pub fn on_request_failed(&self, cause: Option<PartnerError>) {
        let cause = cause.unwrap_or_else(PartnerError::unknown);
        self.resolve_load(Err(LoadError::PartnerReported(cause)));
    }

    /// The partner reports its content is ready.
    pub fn on_content_ready(&self, readiness: ContentReadiness) {
        if readiness.ready {
            self.resolve_load(Ok(EventDetails::new()));
        } else {
            self.resolve_load(Err(LoadError::ContentNotReady));
        }
    }

    fn resolve_load(&self, outcome: Outcome<LoadError>) {
        let mut state = self.lock();
        let Some(completion) = state.load.take() else {
            let status = state.status;
            let slot = state.load.name();
            drop(state);
            debug!(
                session_id = %self.session_id,
                placement = %self.placement,
                %status,
                slot,
                outcome = outcome_label(&outcome),
                "result ignored, nothing pending"
            );
            return;
        };

        let target = if outcome.is_ok() {
            SessionStatus::Loaded
        } else {
            SessionStatus::LoadFailed
        };
        self.advance(&mut state, target);
        drop(state);

        match &outcome {
            Ok(_) => info!(
                session_id = %self.session_id,
                placement = %self.placement,
                "load succeeded"
            ),
            Err(error) => warn!(
                session_id = %self.session_id,
                placement = %self.placement,
                error = %error,
                code = %error.code(),
                "load failed"
            ),
        }
        completion.complete(outcome);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Show
    // ─────────────────────────────────────────────────────────────────────────

    /// Arms the show slot.
    ///
    /// Returns `true` when the caller should present the content. On `false`
    /// the completion has already been resolved synchronously and the partner
    /// must not be called.
    pub fn begin_show(&self, readiness: ContentReadiness, completion: Completion<ShowError>) -> bool {
        let mut state = self.lock();
        let status = state.status;

        let rejection = if state.invalidated {
            Some((ShowError::InvalidAdInstance, completion))
        } else if !readiness.is_showable() || !status.can_transition_to(&SessionStatus::Showing) {
            Some((ShowError::AdNotReady, completion))
        } else {
            match state.show.arm(completion) {
                Ok(()) => {
                    state.status = SessionStatus::Showing;
                    None
                }
                Err(completion) => Some((ShowError::AdNotReady, completion)),
            }
        };
        drop(state);

        match rejection {
            None => {
                info!(
                    session_id = %self.session_id,
                    placement = %self.placement,
                    "show started"
                );
                true
            }
            Some((error, completion)) => {
                warn!(
                    session_id = %self.session_id,
                    placement = %self.placement,
                    %status,
                    ready = readiness.ready,
                    available = readiness.available,
                    error = %error,
                    "show failed"
                );
                completion.complete(Err(error));
                false
            }
        }
    }

    /// The partner put the content on screen.
    pub fn on_content_appeared(&self) {
        self.resolve_show(Ok(EventDetails::new()));
    }

    /// The partner reported a video failure during presentation.
    pub fn on_video_error(&self, message: Option<String>) {
        let message = message.unwrap_or_else(|| UNKNOWN_VIDEO_ERROR.to_string());
        let armed = self.lock().show.is_armed();
        if armed {
            self.resolve_show(Err(ShowError::PartnerReported(message)));
        } else {
            debug!(
                session_id = %self.session_id,
                placement = %self.placement,
                message = %message,
                "stray video error ignored"
            );
        }
    }

    fn resolve_show(&self, outcome: Outcome<ShowError>) {
        let mut state = self.lock();
        let Some(completion) = state.show.take() else {
            let status = state.status;
            let slot = state.show.name();
            drop(state);
            debug!(
                session_id = %self.session_id,
                placement = %self.placement,
                %status,
                slot,
                outcome = outcome_label(&outcome),
                "result ignored, nothing pending"
            );
            return;
        };

        let target = if outcome.is_ok() {
            SessionStatus::Shown
        } else {
            SessionStatus::ShowFailed
        };
        self.advance(&mut state, target);
        drop(state);

        match &outcome {
            Ok(_) => info!(
                session_id = %self.session_id,
                placement = %self.placement,
                "show succeeded"
            ),
            Err(error) => warn!(
                session_id = %self.session_id,
                placement = %self.placement,
                error = %error,
                code = %error.code(),
                "show failed"
            ),
        }
        completion.complete(outcome);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Post-show notifications
    // ─────────────────────────────────────────────────────────────────────────

    /// The partner closed the content.
    pub fn on_content_disappeared(&self) {
        let mut state = self.lock();
        let status = state.status;
        if !status.can_transition_to(&SessionStatus::Dismissed) {
            drop(state);
            debug!(
                session_id = %self.session_id,
                placement = %self.placement,
                %status,
                "dismiss ignored"
            );
            return;
        }
        self.advance(&mut state, SessionStatus::Dismissed);
        let observer = state.observer();
        drop(state);

        info!(
            session_id = %self.session_id,
            placement = %self.placement,
            "ad dismissed"
        );
        self.notify("dismiss", observer, |observer| {
            observer.did_dismiss(&self.session_id, &EventDetails::new(), None)
        });
    }

    /// The user clicked the content.
    pub fn on_click(&self) {
        let Some(observer) = self.presenting_observer("click") else {
            return;
        };
        info!(
            session_id = %self.session_id,
            placement = %self.placement,
            "ad clicked"
        );
        self.notify("click", observer, |observer| {
            observer.did_click(&self.session_id, &EventDetails::new())
        });
    }

    /// The partner granted a reward.
    pub fn on_reward(&self, payload: RewardPayload) {
        let Some(observer) = self.presenting_observer("reward") else {
            return;
        };
        let reward = Reward::from(payload);
        info!(
            session_id = %self.session_id,
            placement = %self.placement,
            amount = reward.amount,
            "reward earned"
        );
        self.notify("reward", observer, |observer| {
            observer.did_reward(&self.session_id, &reward, &EventDetails::new())
        });
    }

    /// Releases the observer and marks the ad instance unusable for showing.
    ///
    /// Pending completions are kept: a late partner event can still resolve them.
    pub fn invalidate(&self) {
        let mut state = self.lock();
        state.invalidated = true;
        state.observer = None;
        let status = state.status;
        drop(state);
        debug!(
            session_id = %self.session_id,
            placement = %self.placement,
            %status,
            "session invalidated"
        );
    }

    /// Returns `Some(observer lookup)` when the session is presenting, logging
    /// and returning `None` otherwise.
    fn presenting_observer(&self, event: &'static str) -> Option<Option<Arc<dyn SessionObserver>>> {
        let state = self.lock();
        let status = state.status;
        if status.is_presenting() {
            Some(state.observer())
        } else {
            drop(state);
            debug!(
                session_id = %self.session_id,
                placement = %self.placement,
                %status,
                event,
                "notification before presentation ignored"
            );
            None
        }
    }

    fn notify(
        &self,
        event: &'static str,
        observer: Option<Arc<dyn SessionObserver>>,
        deliver: impl FnOnce(&dyn SessionObserver),
    ) {
        match observer {
            Some(observer) => deliver(observer.as_ref()),
            None => debug!(
                session_id = %self.session_id,
                placement = %self.placement,
                event,
                "observer unavailable; notification dropped"
            ),
        }
    }

    fn advance(&self, state: &mut ReconcilerState, target: SessionStatus) {
        match state.status.transition_to(target) {
            Ok(next) => state.status = next,
            Err(error) => warn!(
                session_id = %self.session_id,
                placement = %self.placement,
                error = %error,
                "status transition skipped"
            ),
        }
    }
}

fn outcome_label<E>(outcome: &Outcome<E>) -> &'static str {
    if outcome.is_ok() {
        "success"
    } else {
        "failure"
    }
}
