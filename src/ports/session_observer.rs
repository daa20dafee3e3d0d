//! SessionObserver port - Receives post-show notifications for an ad.

use crate::domain::foundation::{AdapterError, SessionId};
use crate::domain::lifecycle::{EventDetails, Reward};

/// Port the mediation host implements to hear about dismisses, clicks and rewards.
///
/// The adapter only ever holds a `Weak` reference to its observer.
pub trait SessionObserver: Send + Sync {
    fn did_dismiss(&self, session: &SessionId, details: &EventDetails, error: Option<&AdapterError>);

    fn did_click(&self, session: &SessionId, details: &EventDetails);

    fn did_reward(&self, session: &SessionId, reward: &Reward, details: &EventDetails);
}
