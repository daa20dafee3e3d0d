//! Single-fire completion handling.

use std::fmt;
use tokio::sync::oneshot;

use super::EventDetails;

/// Result delivered to the host when a load or show finishes.
pub type Outcome<E> = Result<EventDetails, E>;

/// A one-shot outcome callback.
///
/// `complete` consumes the value, so a completion can only ever fire once.
pub struct Completion<E> {
    callback: Box<dyn FnOnce(Outcome<E>) + Send + 'static>,
}

impl<E> Completion<E> {
    pub fn new(callback: impl FnOnce(Outcome<E>) + Send + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }

    pub fn complete(self, outcome: Outcome<E>) {
        (self.callback)(outcome)
    }
}

impl<E: Send + 'static> Completion<E> {
    /// Creates a completion whose outcome can be awaited on the returned receiver.
    pub fn channel() -> (Self, oneshot::Receiver<Outcome<E>>) {
        let (tx, rx) = oneshot::channel();
        let completion = Self::new(move |outcome| {
            // Receiver may have been dropped by a host that no longer cares.
            let _ = tx.send(outcome);
        });
        (completion, rx)
    }
}

impl<E> fmt::Debug for Completion<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion").finish_non_exhaustive()
    }
}

/// Holds at most one pending completion.
///
/// Resolution moves the completion out, leaving the slot empty; resolving an
/// empty slot yields `None` so callers can log the ignored event.
#[derive(Debug)]
pub struct CompletionSlot<E> {
    name: &'static str,
    pending: Option<Completion<E>>,
}

impl<E> CompletionSlot<E> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            pending: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Arms the slot. Hands the completion back if one is already pending.
    pub fn arm(&mut self, completion: Completion<E>) -> Result<(), Completion<E>> {
        if self.pending.is_some() {
            return Err(completion);
        }
        self.pending = Some(completion);
        Ok(())
    }

    /// Takes the pending completion, disarming the slot.
    pub fn take(&mut self) -> Option<Completion<E>> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting() -> (Completion<String>, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let completion = Completion::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (completion, count)
    }

    #[test]
    fn new_slot_is_empty() {
        let mut slot: CompletionSlot<String> = CompletionSlot::new("load");
        assert_eq!(slot.name(), "load");
        assert!(!slot.is_armed());
        assert!(slot.take().is_none());
    }

    #[test]
    fn take_disarms_slot() {
        let mut slot = CompletionSlot::new("load");
        let (completion, count) = counting();
        slot.arm(completion).unwrap();
        assert!(slot.is_armed());

        slot.take().unwrap().complete(Ok(EventDetails::new()));
        assert!(!slot.is_armed());
        assert!(slot.take().is_none());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arming_twice_returns_second_completion() {
        let mut slot = CompletionSlot::new("show");
        let (first, first_count) = counting();
        let (second, second_count) = counting();

        slot.arm(first).unwrap();
        let rejected = slot.arm(second).unwrap_err();
        rejected.complete(Err("rejected".to_string()));

        assert_eq!(first_count.load(Ordering::SeqCst), 0);
        assert_eq!(second_count.load(Ordering::SeqCst), 1);
        assert!(slot.is_armed());
    }

    #[tokio::test]
    async fn channel_delivers_outcome() {
        let (completion, rx) = Completion::<String>::channel();
        let details = EventDetails::from([("k".to_string(), "v".to_string())]);
        completion.complete(Ok(details.clone()));
        assert_eq!(rx.await.unwrap(), Ok(details));
    }

    #[test]
    fn channel_tolerates_dropped_receiver() {
        let (completion, rx) = Completion::<String>::channel();
        drop(rx);
        completion.complete(Err("nobody listening".to_string()));
    }
}
