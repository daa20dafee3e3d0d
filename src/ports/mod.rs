//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the adapter domain and the outside world.
//!
//! ## Host-facing Ports
//!
//! - `PartnerAdapter` / `PartnerAd` - The mediation host's adapter contract
//! - `SessionObserver` - Receives dismiss, click and reward notifications
//!
//! ## Partner-facing Ports
//!
//! - `PartnerSdk` / `PrivacyPolicy` - Global partner SDK functions
//! - `PlacementHandle` - One partner ad opportunity
//! - `PlacementDelegate` / `VideoAdDelegate` - Partner callbacks into the adapter
//!
//! ## Runtime Ports
//!
//! - `UiDispatcher` - Runs presentation work on the UI context

mod partner_adapter;
mod partner_sdk;
mod placement;
mod session_observer;
mod ui_dispatcher;

pub use partner_adapter::{PartnerAd, PartnerAdapter};
pub use partner_sdk::{ConnectionState, PartnerSdk, PrivacyPolicy};
pub use placement::{
    PlacementDelegate, PlacementHandle, PlacementSpec, VideoAdDelegate, ViewHandle,
};
pub use session_observer::SessionObserver;
pub use ui_dispatcher::{UiDispatcher, UiTask};
