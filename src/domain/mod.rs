//! Domain layer containing adapter logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, formats, versions, errors, state machine)
//! - `lifecycle` - Placement session lifecycle and the event reconciler
//! - `setup` - Partner configuration and setup failures
//! - `privacy` - Consent signals and their partner settings

pub mod foundation;
pub mod lifecycle;
pub mod privacy;
pub mod setup;
