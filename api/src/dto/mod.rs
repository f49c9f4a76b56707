//! Request and response bodies of the temp token endpoints
//!
//! The API speaks the service's own types; this module gathers them in one
//! place for the handlers.

pub use um_core::domain::value_objects::{IssuedTempToken, ServiceStatus, StatusCode, TempTokenInfo, TempTokenInfos};
pub use um_core::services::temp_token::{GenerateTempTokenRequest, TempTokenRef, UserTempTokensQuery};
pub use um_shared::ErrorResponse;
