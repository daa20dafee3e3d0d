//! Dispatcher that runs tasks on the calling thread.
//!
//! Suitable when the host already calls `show` from its UI context, and for
//! deterministic tests.

use crate::ports::{UiDispatcher, UiTask};

#[derive(Debug, Clone, Copy, Default)]
pub struct InlineDispatcher;

impl InlineDispatcher {
    pub fn new() -> Self {
        Self
    }
}

impl UiDispatcher for InlineDispatcher {
    fn dispatch(&self, task: UiTask) {
        task()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn runs_task_before_returning() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        InlineDispatcher::new().dispatch(Box::new(move || flag.store(true, Ordering::SeqCst)));
        assert!(ran.load(Ordering::SeqCst));
    }
}
