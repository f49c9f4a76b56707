//! Value objects representing immutable domain concepts.

pub mod service_status;
pub mod temp_token_info;

// Re-export commonly used types
pub use service_status::{ServiceStatus, StatusCode};
pub use temp_token_info::{IssuedTempToken, TempTokenInfo, TempTokenInfos};
