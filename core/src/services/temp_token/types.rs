//! Request types for the temp token service

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Request to generate a temp token
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateTempTokenRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub instance_id: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub info: HashMap<String, String>,
    /// Absolute Unix timestamp in seconds; 0 selects the default lifetime
    #[serde(default)]
    pub expiration: i64,
}

/// Reference to a single temp token
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TempTokenRef {
    #[serde(default)]
    pub token: String,
}

impl TempTokenRef {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

/// Selects the temp tokens of one user, optionally of one purpose
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserTempTokensQuery {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub instance_id: String,
    /// Empty matches every purpose
    #[serde(default)]
    pub purpose: String,
}

impl UserTempTokensQuery {
    pub fn new(
        user_id: impl Into<String>,
        instance_id: impl Into<String>,
        purpose: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            instance_id: instance_id.into(),
            purpose: purpose.into(),
        }
    }

    /// Purpose filter, `None` when empty
    pub fn purpose_filter(&self) -> Option<&str> {
        Some(self.purpose.as_str()).filter(|p| !p.is_empty())
    }

    pub(crate) fn has_owner(&self) -> bool {
        !self.user_id.is_empty() && !self.instance_id.is_empty()
    }
}
