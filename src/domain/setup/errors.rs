//! Setup failure types.

use std::time::Duration;
use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Why the partner SDK could not be initialized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("missing credential '{key}'")]
    MissingCredential { key: String },

    #[error("partner SDK did not connect within {timeout:?}")]
    ConnectTimeout { timeout: Duration },

    #[error("partner SDK failed to connect")]
    Unknown,
}

impl SetupError {
    pub fn missing_credential(key: impl Into<String>) -> Self {
        SetupError::MissingCredential { key: key.into() }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SetupError::MissingCredential { .. } => {
                ErrorCode::InitializationFailureInvalidCredentials
            }
            SetupError::ConnectTimeout { .. } => ErrorCode::InitializationFailureTimeout,
            SetupError::Unknown => ErrorCode::InitializationFailureUnknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            SetupError::missing_credential("sdk_key").to_string(),
            "missing credential 'sdk_key'"
        );
        assert_eq!(
            SetupError::ConnectTimeout {
                timeout: Duration::from_secs(5)
            }
            .to_string(),
            "partner SDK did not connect within 5s"
        );
    }

    #[test]
    fn codes() {
        assert_eq!(
            SetupError::ConnectTimeout {
                timeout: Duration::from_secs(5)
            }
            .code(),
            ErrorCode::InitializationFailureTimeout
        );
        assert_eq!(SetupError::Unknown.code(), ErrorCode::InitializationFailureUnknown);
    }
}
