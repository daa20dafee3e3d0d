//! Dispatcher that schedules tasks on a designated tokio runtime.
//!
//! Hosts that drive their UI from a dedicated current-thread runtime hand its
//! handle to this dispatcher; presentation calls then always run there.

use tokio::runtime::Handle;
use tracing::trace;

use crate::ports::{UiDispatcher, UiTask};

#[derive(Debug, Clone)]
pub struct TokioDispatcher {
    handle: Handle,
}

impl TokioDispatcher {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Dispatcher for the runtime the caller is currently running on.
    ///
    /// Returns `None` outside of a tokio runtime.
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl UiDispatcher for TokioDispatcher {
    fn dispatch(&self, task: UiTask) {
        trace!("dispatching task to UI runtime");
        self.handle.spawn(async move { task() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[test]
    fn current_is_none_outside_runtime() {
        assert!(TokioDispatcher::current().is_none());
    }

    #[tokio::test]
    async fn runs_task_on_runtime() {
        let dispatcher = TokioDispatcher::current().unwrap();
        let (tx, rx) = oneshot::channel();

        dispatcher.dispatch(Box::new(move || {
            let _ = tx.send(std::thread::current().id());
        }));

        assert_eq!(rx.await.unwrap(), std::thread::current().id());
    }
}
