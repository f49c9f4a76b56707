//! Public views of temporary tokens exchanged with callers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::temp_token::TempToken;

/// Public information about a temporary token
///
/// Returned by validation and listing. The `token` field is carried so that
/// listed tokens can be validated or deleted individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempTokenInfo {
    pub token: String,
    pub user_id: String,
    pub instance_id: String,
    pub purpose: String,
    pub info: HashMap<String, String>,
    /// Absolute Unix timestamp in seconds
    pub expiration: i64,
}

impl From<TempToken> for TempTokenInfo {
    fn from(token: TempToken) -> Self {
        Self {
            token: token.token,
            user_id: token.user_id,
            instance_id: token.instance_id,
            purpose: token.purpose,
            info: token.info,
            expiration: token.expiration,
        }
    }
}

/// Token string handed back by generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedTempToken {
    pub token: String,
}

/// List of token infos for a single user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempTokenInfos {
    pub token_infos: Vec<TempTokenInfo>,
}

impl From<Vec<TempToken>> for TempTokenInfos {
    fn from(tokens: Vec<TempToken>) -> Self {
        Self {
            token_infos: tokens.into_iter().map(TempTokenInfo::from).collect(),
        }
    }
}
