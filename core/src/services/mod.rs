//! Business services containing domain logic and use cases.

pub mod temp_token;

// Re-export commonly used types
pub use temp_token::{
    CleanupReporter, Clock, ClockTokenIssuer, GenerateTempTokenRequest, ManualClock, SystemClock,
    TempTokenRef, TempTokenService, TempTokenServiceConfig, TokenIssuer, TracingCleanupReporter,
    UserTempTokensQuery,
};
