//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::AdFormat;
use crate::domain::lifecycle::{LoadError, ShowError};
use crate::domain::setup::SetupError;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes reported to the mediation host, organized by lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Setup
    InitializationFailureInvalidCredentials,
    InitializationFailureTimeout,
    InitializationFailureUnknown,

    // Ad creation
    LoadFailureAborted,
    LoadFailureUnsupportedAdFormat,

    // Load
    LoadFailureNoFill,
    LoadFailureNotReady,
    LoadFailurePartnerError,
    LoadFailureInvalidState,

    // Show
    ShowFailureAdNotReady,
    ShowFailurePartnerError,
    ShowFailureInvalidAdInstance,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InitializationFailureInvalidCredentials => {
                "INITIALIZATION_FAILURE_INVALID_CREDENTIALS"
            }
            ErrorCode::InitializationFailureTimeout => "INITIALIZATION_FAILURE_TIMEOUT",
            ErrorCode::InitializationFailureUnknown => "INITIALIZATION_FAILURE_UNKNOWN",
            ErrorCode::LoadFailureAborted => "LOAD_FAILURE_ABORTED",
            ErrorCode::LoadFailureUnsupportedAdFormat => "LOAD_FAILURE_UNSUPPORTED_AD_FORMAT",
            ErrorCode::LoadFailureNoFill => "LOAD_FAILURE_NO_FILL",
            ErrorCode::LoadFailureNotReady => "LOAD_FAILURE_NOT_READY",
            ErrorCode::LoadFailurePartnerError => "LOAD_FAILURE_PARTNER_ERROR",
            ErrorCode::LoadFailureInvalidState => "LOAD_FAILURE_INVALID_STATE",
            ErrorCode::ShowFailureAdNotReady => "SHOW_FAILURE_AD_NOT_READY",
            ErrorCode::ShowFailurePartnerError => "SHOW_FAILURE_PARTNER_ERROR",
            ErrorCode::ShowFailureInvalidAdInstance => "SHOW_FAILURE_INVALID_AD_INSTANCE",
        };
        write!(f, "{}", s)
    }
}

/// Top-level adapter error surfaced to the mediation host.
///
/// Every variant is terminal for the operation that produced it; nothing is
/// retried inside the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The partner SDK refused to construct a placement for the identifier.
    #[error("failed to create placement '{placement}'")]
    PlacementCreation { placement: String },

    /// The requested ad format is not supported by this partner.
    #[error("{0} ads are not supported")]
    UnsupportedFormat(AdFormat),

    #[error("load failed: {0}")]
    Load(#[from] LoadError),

    #[error("show failed: {0}")]
    Show(#[from] ShowError),

    #[error("setup failed: {0}")]
    Setup(#[from] SetupError),
}

impl AdapterError {
    /// Creates a placement creation error.
    pub fn placement_creation(placement: impl Into<String>) -> Self {
        AdapterError::PlacementCreation {
            placement: placement.into(),
        }
    }

    /// Returns the host-facing error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AdapterError::PlacementCreation { .. } => ErrorCode::LoadFailureAborted,
            AdapterError::UnsupportedFormat(_) => ErrorCode::LoadFailureUnsupportedAdFormat,
            AdapterError::Load(err) => err.code(),
            AdapterError::Show(err) => err.code(),
            AdapterError::Setup(err) => err.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lifecycle::PartnerError;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("placement");
        assert_eq!(format!("{}", err), "Field 'placement' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("adapter_version", "expected 5 or 6 components");
        assert_eq!(
            format!("{}", err),
            "Field 'adapter_version' has invalid format: expected 5 or 6 components"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::LoadFailureNoFill), "LOAD_FAILURE_NO_FILL");
        assert_eq!(
            format!("{}", ErrorCode::ShowFailureInvalidAdInstance),
            "SHOW_FAILURE_INVALID_AD_INSTANCE"
        );
    }

    #[test]
    fn adapter_error_code_delegates_to_inner_error() {
        let load: AdapterError = LoadError::PartnerReported(PartnerError::new("timeout")).into();
        assert_eq!(load.code(), ErrorCode::LoadFailurePartnerError);

        let show: AdapterError = ShowError::AdNotReady.into();
        assert_eq!(show.code(), ErrorCode::ShowFailureAdNotReady);

        let setup: AdapterError = SetupError::missing_credential("sdk_key").into();
        assert_eq!(setup.code(), ErrorCode::InitializationFailureInvalidCredentials);
    }

    #[test]
    fn placement_creation_maps_to_aborted() {
        let err = AdapterError::placement_creation("level_complete");
        assert_eq!(err.code(), ErrorCode::LoadFailureAborted);
        assert_eq!(err.to_string(), "failed to create placement 'level_complete'");
    }

    #[test]
    fn unsupported_format_displays_format_name() {
        let err = AdapterError::UnsupportedFormat(AdFormat::Banner);
        assert_eq!(err.to_string(), "banner ads are not supported");
        assert_eq!(err.code(), ErrorCode::LoadFailureUnsupportedAdFormat);
    }
}
