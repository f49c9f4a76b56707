//! Temporary token policy configuration

use serde::{Deserialize, Serialize};

/// Default lifetime of a temporary token when the caller gives no expiration
pub const DEFAULT_TEMP_TOKEN_LIFETIME_DAYS: i64 = 10;

/// Number of random bytes behind a generated token string
pub const DEFAULT_TOKEN_LENGTH_BYTES: usize = 32;

/// Largest token length whose hex form fits the 128-character token column
pub const MAX_TOKEN_LENGTH_BYTES: usize = 64;

/// Temporary token configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TempTokenConfig {
    /// Lifetime applied when a token is generated without expiration (days)
    #[serde(default = "default_lifetime_days")]
    pub default_lifetime_days: i64,

    /// Random bytes per token; the token string is hex encoded
    #[serde(default = "default_token_length_bytes")]
    pub token_length_bytes: usize,
}

impl Default for TempTokenConfig {
    fn default() -> Self {
        Self {
            default_lifetime_days: DEFAULT_TEMP_TOKEN_LIFETIME_DAYS,
            token_length_bytes: DEFAULT_TOKEN_LENGTH_BYTES,
        }
    }
}

impl TempTokenConfig {
    /// Create from `TEMP_TOKEN_DEFAULT_LIFETIME_DAYS` and `TEMP_TOKEN_LENGTH_BYTES`
    ///
    /// Non-positive or unparsable values fall back to the defaults. Token
    /// lengths above `MAX_TOKEN_LENGTH_BYTES` are clamped to it.
    pub fn from_env() -> Self {
        Self {
            default_lifetime_days: parse_lifetime_days(
                std::env::var("TEMP_TOKEN_DEFAULT_LIFETIME_DAYS").ok().as_deref(),
            ),
            token_length_bytes: parse_token_length_bytes(
                std::env::var("TEMP_TOKEN_LENGTH_BYTES").ok().as_deref(),
            ),
        }
    }
}

fn parse_lifetime_days(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.parse::<i64>().ok())
        .filter(|days| *days > 0)
        .unwrap_or(DEFAULT_TEMP_TOKEN_LIFETIME_DAYS)
}

fn parse_token_length_bytes(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.parse::<usize>().ok())
        .filter(|len| *len > 0)
        .map(|len| len.min(MAX_TOKEN_LENGTH_BYTES))
        .unwrap_or(DEFAULT_TOKEN_LENGTH_BYTES)
}

fn default_lifetime_days() -> i64 {
    DEFAULT_TEMP_TOKEN_LIFETIME_DAYS
}

fn default_token_length_bytes() -> usize {
    DEFAULT_TOKEN_LENGTH_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length_is_bounded() {
        assert_eq!(parse_token_length_bytes(Some("16")), 16);
        assert_eq!(parse_token_length_bytes(Some("64")), 64);
        assert_eq!(parse_token_length_bytes(Some("65")), MAX_TOKEN_LENGTH_BYTES);
        assert_eq!(parse_token_length_bytes(Some("0")), DEFAULT_TOKEN_LENGTH_BYTES);
        assert_eq!(parse_token_length_bytes(Some("many")), DEFAULT_TOKEN_LENGTH_BYTES);
        assert_eq!(parse_token_length_bytes(None), DEFAULT_TOKEN_LENGTH_BYTES);
    }

    #[test]
    fn test_lifetime_days_fallback() {
        assert_eq!(parse_lifetime_days(Some("3")), 3);
        assert_eq!(parse_lifetime_days(Some("-1")), DEFAULT_TEMP_TOKEN_LIFETIME_DAYS);
        assert_eq!(parse_lifetime_days(None), DEFAULT_TEMP_TOKEN_LIFETIME_DAYS);
    }
}
