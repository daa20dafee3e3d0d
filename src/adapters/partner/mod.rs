//! Partner SDK implementations.
//!
//! - `in_memory` - Scriptable stand-in for the Tapjoy SDK, used by tests and
//!   by hosts exercising mediation flows without the proprietary binary

mod in_memory;

pub use in_memory::{
    ConnectBehavior, InMemoryPartnerSdk, InMemoryPlacement, InMemoryPrivacyPolicy,
};
