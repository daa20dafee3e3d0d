//! UiDispatcher port - Runs presentation work on the designated UI context.

/// Unit of work for the UI context.
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// Port for scheduling work on the UI (main) execution context.
pub trait UiDispatcher: Send + Sync {
    fn dispatch(&self, task: UiTask);
}
