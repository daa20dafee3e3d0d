//! Application layer - The partner adapter and its ads.
//!
//! This layer wires the domain's lifecycle reconciler to the partner SDK
//! ports and exposes the host-facing `PartnerAdapter` implementation.

mod ad;
mod adapter;
mod connect;

pub use ad::TapjoyAd;
pub use adapter::{TapjoyAdapter, ADAPTER_VERSION, PARTNER_DISPLAY_NAME, PARTNER_IDENTIFIER};
pub use connect::ConnectWaiter;
