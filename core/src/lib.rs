//! # User Management Core
//!
//! Domain layer for temporary tokens: short-lived, purpose-scoped tokens used
//! for email verification, password reset and account linking flows.
//! This crate contains the domain entities, the repository interface, the
//! issuing collaborators and the `TempTokenService` that ties them together.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::{
    IssuedTempToken, ServiceStatus, StatusCode, TempToken, TempTokenInfo, TempTokenInfos,
    TempTokenState,
};
pub use errors::{DomainError, DomainResult, ErrorCode, MISSING_ARGUMENT, TOKEN_EXPIRED};
pub use repositories::{InMemoryTempTokenRepository, TempTokenRepository};
pub use services::{
    CleanupReporter, Clock, ClockTokenIssuer, GenerateTempTokenRequest, ManualClock, SystemClock,
    TempTokenRef, TempTokenService, TempTokenServiceConfig, TokenIssuer, TracingCleanupReporter,
    UserTempTokensQuery,
};
