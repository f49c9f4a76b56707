//! Configuration for the temp token service

use chrono::Duration;
use um_shared::config::TempTokenConfig;
use um_shared::config::temp_token::{DEFAULT_TEMP_TOKEN_LIFETIME_DAYS, DEFAULT_TOKEN_LENGTH_BYTES};

/// Configuration for the temp token service
#[derive(Debug, Clone)]
pub struct TempTokenServiceConfig {
    /// Lifetime applied when a token is generated without expiration
    pub default_lifetime: Duration,
    /// Random bytes behind each generated token string
    pub token_length_bytes: usize,
}

impl Default for TempTokenServiceConfig {
    fn default() -> Self {
        Self {
            default_lifetime: Duration::days(DEFAULT_TEMP_TOKEN_LIFETIME_DAYS),
            token_length_bytes: DEFAULT_TOKEN_LENGTH_BYTES,
        }
    }
}

impl From<&TempTokenConfig> for TempTokenServiceConfig {
    fn from(config: &TempTokenConfig) -> Self {
        Self {
            default_lifetime: Duration::days(config.default_lifetime_days),
            token_length_bytes: config.token_length_bytes,
        }
    }
}
