//! Temporary token entity for purpose-scoped, short-lived user flows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a temporary token at a given instant
///
/// `Deleted` is never observed on a record; it is the state of a token
/// that no longer exists in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempTokenState {
    /// `now <= expiration`
    Active,
    /// `now > expiration`, detected on read only
    Expired,
    /// Removed by an explicit delete, a purge or expired-read cleanup
    Deleted,
}

/// Temporary token record as persisted by a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempToken {
    /// Opaque token string, unique across the store
    ///
    /// Empty until a repository assigns it on insert.
    #[serde(default)]
    pub token: String,

    /// Owner of the token
    pub user_id: String,

    /// Tenant the owner belongs to
    pub instance_id: String,

    /// Free-form category, e.g. `password-reset`
    pub purpose: String,

    /// Opaque payload attached by the caller
    #[serde(default)]
    pub info: HashMap<String, String>,

    /// Absolute Unix timestamp in seconds
    pub expiration: i64,
}

impl TempToken {
    /// Creates a token record that has not been assigned a token string yet
    pub fn new(
        user_id: impl Into<String>,
        instance_id: impl Into<String>,
        purpose: impl Into<String>,
        info: HashMap<String, String>,
        expiration: i64,
    ) -> Self {
        Self {
            token: String::new(),
            user_id: user_id.into(),
            instance_id: instance_id.into(),
            purpose: purpose.into(),
            info,
            expiration,
        }
    }

    /// Returns a copy of this record carrying the given token string
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Checks whether the token has expired at `now` (Unix seconds)
    ///
    /// A token is still valid at exactly its expiration second.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expiration
    }

    pub fn state_at(&self, now: i64) -> TempTokenState {
        if self.is_expired_at(now) {
            TempTokenState::Expired
        } else {
            TempTokenState::Active
        }
    }

    /// Checks whether this record belongs to the given owner
    ///
    /// `None` matches every purpose.
    pub fn matches_owner(&self, instance_id: &str, user_id: &str, purpose: Option<&str>) -> bool {
        self.instance_id == instance_id
            && self.user_id == user_id
            && purpose.map_or(true, |p| self.purpose == p)
    }

    /// Seconds left until expiration, or zero once expired
    pub fn seconds_until_expiration(&self, now: i64) -> i64 {
        (self.expiration - now).max(0)
    }
}
