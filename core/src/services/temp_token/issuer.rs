//! Token issuing collaborator: expiration arithmetic and token strings

use chrono::Duration;
use rand::{rngs::OsRng, RngCore};
use std::sync::Arc;

use super::clock::{Clock, SystemClock};

/// Expiration policy used by the temp token service
pub trait TokenIssuer: Send + Sync {
    /// Current time as a Unix timestamp in seconds
    fn now(&self) -> i64;

    /// Absolute expiration `lifetime` from now, in Unix seconds
    fn expiration_after(&self, lifetime: Duration) -> i64 {
        self.now() + lifetime.num_seconds()
    }
}

/// Token issuer backed by an injectable clock
#[derive(Clone)]
pub struct ClockTokenIssuer {
    clock: Arc<dyn Clock>,
}

impl ClockTokenIssuer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for ClockTokenIssuer {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl TokenIssuer for ClockTokenIssuer {
    fn now(&self) -> i64 {
        self.clock.now().timestamp()
    }
}

/// Generate an opaque token string
///
/// Draws `length_bytes` bytes from the OS random number generator and
/// hex encodes them, so the result has `2 * length_bytes` characters.
pub fn generate_token_string(length_bytes: usize) -> String {
    let mut bytes = vec![0u8; length_bytes];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::temp_token::ManualClock;

    #[test]
    fn test_expiration_after_uses_clock() {
        let issuer = ClockTokenIssuer::new(Arc::new(ManualClock::at_timestamp(1_000)));
        assert_eq!(issuer.now(), 1_000);
        assert_eq!(issuer.expiration_after(Duration::days(10)), 1_000 + 864_000);
    }

    #[test]
    fn test_generate_token_string() {
        let token = generate_token_string(32);
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token, generate_token_string(32));
    }
}
