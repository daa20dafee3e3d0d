//! Privacy domain module.
//!
//! Maps the host's privacy signals onto the values the partner privacy policy
//! expects. Unknown or absent signals map to `None` and are not forwarded.

mod consent;

pub use consent::{GdprConsentStatus, PrivacySetting};
