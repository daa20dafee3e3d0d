//! Lifecycle domain module.
//!
//! Reconciles asynchronous partner placement events into exactly-once load and
//! show outcomes for the mediation host, and forwards post-show notifications
//! (dismiss, click, reward) to the session observer.

mod errors;
mod outcome;
mod reconciler;
mod slot;
mod status;

pub use errors::{LoadError, PartnerError, ShowError};
pub use outcome::{ContentReadiness, EventDetails, Reward, RewardPayload};
pub use reconciler::LifecycleReconciler;
pub use slot::{Completion, CompletionSlot, Outcome};
pub use status::SessionStatus;
