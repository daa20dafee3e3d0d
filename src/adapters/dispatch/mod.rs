//! UI dispatcher implementations.

mod inline;
mod tokio_dispatcher;

pub use inline::InlineDispatcher;
pub use tokio_dispatcher::TokioDispatcher;
