//! Setup domain module.
//!
//! Host-provided partner configuration and the setup failure taxonomy.

mod credentials;
mod errors;

pub use credentials::{PartnerConfiguration, SDK_KEY};
pub use errors::SetupError;
