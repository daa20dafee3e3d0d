//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the adapter core to its runtime and to test doubles:
//! - `dispatch` - UI dispatchers (inline, tokio runtime)
//! - `observer` - Session observers (recording)
//! - `partner` - Partner SDK implementations (in-memory)

pub mod dispatch;
pub mod observer;
pub mod partner;

pub use dispatch::{InlineDispatcher, TokioDispatcher};
pub use observer::{Dismissal, RecordingObserver};
pub use partner::{ConnectBehavior, InMemoryPartnerSdk, InMemoryPlacement, InMemoryPrivacyPolicy};
