//! Domain-specific error types and error handling.

use thiserror::Error;

/// Message used when a required request field is missing
pub const MISSING_ARGUMENT: &str = "missing argument";

/// Message used when a token is read after its expiration
pub const TOKEN_EXPIRED: &str = "token expired";

/// Status code taxonomy exposed to transports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed or missing client input
    InvalidArgument,
    /// Storage collaborator failure
    Internal,
}

impl ErrorCode {
    /// Stable code string for API responses
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Client error for an absent request or an empty required field
    pub fn missing_argument() -> Self {
        DomainError::InvalidArgument {
            message: MISSING_ARGUMENT.to_string(),
        }
    }

    /// Client error for a token read after its expiration
    pub fn token_expired() -> Self {
        DomainError::InvalidArgument {
            message: TOKEN_EXPIRED.to_string(),
        }
    }

    /// Server error carrying the underlying message verbatim
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            DomainError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// The message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidArgument { message } | DomainError::Internal { message } => message,
        }
    }

    /// Re-tag any error as a storage failure, keeping its message
    pub(crate) fn into_internal(self) -> Self {
        match self {
            DomainError::InvalidArgument { message } => DomainError::Internal { message },
            internal => internal,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::missing_argument().code(), ErrorCode::InvalidArgument);
        assert_eq!(DomainError::token_expired().code(), ErrorCode::InvalidArgument);
        assert_eq!(DomainError::internal("db down").code(), ErrorCode::Internal);
        assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL");
    }

    #[test]
    fn test_message_passthrough() {
        let err = DomainError::internal("connection reset by peer");
        assert_eq!(err.message(), "connection reset by peer");
        assert_eq!(err.to_string(), "Internal error: connection reset by peer");
        assert_eq!(DomainError::token_expired().message(), "token expired");
    }

    #[test]
    fn test_into_internal_keeps_message() {
        let err = DomainError::InvalidArgument {
            message: "Temp token already exists".to_string(),
        }
        .into_internal();
        assert_eq!(err, DomainError::internal("Temp token already exists"));
    }
}
