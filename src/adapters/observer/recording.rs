//! Observer that records every notification it receives.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use std::sync::Mutex;

use crate::domain::foundation::{AdapterError, SessionId};
use crate::domain::lifecycle::{EventDetails, Reward};
use crate::ports::SessionObserver;

/// One recorded dismiss notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dismissal {
    pub session: SessionId,
    pub error: Option<AdapterError>,
}

/// Session observer that captures notifications for assertions.
///
/// # Example
///
/// ```ignore
/// let observer = Arc::new(RecordingObserver::new());
/// let ad = adapter.make_ad(request, Arc::downgrade(&observer) as Weak<dyn SessionObserver>)?;
/// // ... drive the ad ...
/// assert_eq!(observer.dismiss_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingObserver {
    dismissals: Mutex<Vec<Dismissal>>,
    clicks: Mutex<Vec<SessionId>>,
    rewards: Mutex<Vec<(SessionId, Reward)>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dismissals(&self) -> Vec<Dismissal> {
        self.dismissals
            .lock()
            .expect("RecordingObserver: dismissals lock poisoned")
            .clone()
    }

    pub fn dismiss_count(&self) -> usize {
        self.dismissals
            .lock()
            .expect("RecordingObserver: dismissals lock poisoned")
            .len()
    }

    pub fn click_count(&self) -> usize {
        self.clicks
            .lock()
            .expect("RecordingObserver: clicks lock poisoned")
            .len()
    }

    pub fn rewards(&self) -> Vec<Reward> {
        self.rewards
            .lock()
            .expect("RecordingObserver: rewards lock poisoned")
            .iter()
            .map(|(_, reward)| reward.clone())
            .collect()
    }
}

impl SessionObserver for RecordingObserver {
    fn did_dismiss(&self, session: &SessionId, _details: &EventDetails, error: Option<&AdapterError>) {
        self.dismissals
            .lock()
            .expect("RecordingObserver: dismissals lock poisoned")
            .push(Dismissal {
                session: *session,
                error: error.cloned(),
            });
    }

    fn did_click(&self, session: &SessionId, _details: &EventDetails) {
        self.clicks
            .lock()
            .expect("RecordingObserver: clicks lock poisoned")
            .push(*session);
    }

    fn did_reward(&self, session: &SessionId, reward: &Reward, _details: &EventDetails) {
        self.rewards
            .lock()
            .expect("RecordingObserver: rewards lock poisoned")
            .push((*session, reward.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_notifications() {
        let observer = RecordingObserver::new();
        let session = SessionId::new();
        let details = EventDetails::new();

        observer.did_click(&session, &details);
        observer.did_reward(&session, &Reward::default(), &details);
        observer.did_dismiss(&session, &details, None);

        assert_eq!(observer.click_count(), 1);
        assert_eq!(observer.rewards(), vec![Reward::default()]);
        assert_eq!(
            observer.dismissals(),
            vec![Dismissal {
                session,
                error: None
            }]
        );
    }
}
