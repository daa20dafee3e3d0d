//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the adapter domain.

mod ad_format;
mod adapter_version;
mod errors;
mod ids;
mod load_request;
mod state_machine;

pub use ad_format::{AdFormat, FullscreenFormat};
pub use adapter_version::AdapterVersion;
pub use errors::{AdapterError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use load_request::{BidderInfo, LoadRequest, PreBidRequest};
pub use state_machine::StateMachine;
