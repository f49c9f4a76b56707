//! Conversion of domain errors into HTTP responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use um_core::errors::{DomainError, ErrorCode};
use um_shared::ErrorResponse;

/// Domain error carried out of a handler
///
/// `InvalidArgument` answers 400 and `Internal` answers 500, both with an
/// `ErrorResponse` body whose `error` is the code string.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0.code() {
            ErrorCode::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.0.code() == ErrorCode::Internal {
            tracing::error!(error = %self.0, event = "request_failed", "Temp token request failed");
        } else {
            tracing::debug!(error = %self.0, event = "request_rejected", "Temp token request rejected");
        }

        HttpResponse::build(self.status_code())
            .json(ErrorResponse::new(self.0.code().as_str(), self.0.message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError(DomainError::missing_argument()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(DomainError::internal("db down")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
