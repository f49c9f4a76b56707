//! Temporary token service module
//!
//! This module provides the temp token lifecycle:
//! - Generation with a default expiration policy
//! - Validation with expiry enforcement and lazy cleanup
//! - Per-user listing and bulk/point deletion

mod clock;
mod config;
mod issuer;
mod reporter;
mod service;
mod types;


pub use clock::{Clock, ManualClock, SystemClock};
pub use config::TempTokenServiceConfig;
pub use issuer::{generate_token_string, ClockTokenIssuer, TokenIssuer};
pub use reporter::{CleanupReporter, TracingCleanupReporter};
pub use service::{TempTokenService, DELETED_MESSAGE};
pub use types::{GenerateTempTokenRequest, TempTokenRef, UserTempTokensQuery};
