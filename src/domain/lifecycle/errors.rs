//! Load and show failure types.

use std::fmt;
use thiserror::Error;

use super::SessionStatus;
use crate::domain::foundation::ErrorCode;

/// An error reported by the partner SDK, carried as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerError {
    code: Option<i64>,
    message: String,
}

impl PartnerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Stand-in used when the partner fails without supplying an error.
    pub fn unknown() -> Self {
        Self::new("unknown partner error")
    }

    pub fn code(&self) -> Option<i64> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PartnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for PartnerError {}

/// Why a load did not produce a showable ad.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("no content available")]
    ContentUnavailable,

    #[error("content not ready")]
    ContentNotReady,

    #[error("partner reported: {0}")]
    PartnerReported(PartnerError),

    /// Sessions are single-use; a second load is refused.
    #[error("load requested while session is {0}")]
    InvalidState(SessionStatus),
}

impl LoadError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LoadError::ContentUnavailable => ErrorCode::LoadFailureNoFill,
            LoadError::ContentNotReady => ErrorCode::LoadFailureNotReady,
            LoadError::PartnerReported(_) => ErrorCode::LoadFailurePartnerError,
            LoadError::InvalidState(_) => ErrorCode::LoadFailureInvalidState,
        }
    }
}

/// Why a show did not present the ad.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShowError {
    #[error("ad is not ready to show")]
    AdNotReady,

    #[error("partner reported: {0}")]
    PartnerReported(String),

    #[error("ad instance is no longer valid")]
    InvalidAdInstance,
}

impl ShowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ShowError::AdNotReady => ErrorCode::ShowFailureAdNotReady,
            ShowError::PartnerReported(_) => ErrorCode::ShowFailurePartnerError,
            ShowError::InvalidAdInstance => ErrorCode::ShowFailureInvalidAdInstance,
        }
    }
}
