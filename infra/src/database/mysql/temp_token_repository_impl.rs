//! MySQL implementation of the TempTokenRepository trait.
//!
//! Tokens live in a single `temp_tokens` table keyed by the token string.
//! The info map is stored as JSON text and expiration as Unix seconds.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use std::collections::HashMap;

use um_core::domain::entities::temp_token::TempToken;
use um_core::errors::DomainError;
use um_core::repositories::TempTokenRepository;
use um_core::services::temp_token::generate_token_string;
use um_shared::config::temp_token::MAX_TOKEN_LENGTH_BYTES;

/// DDL for the temp token table
///
/// Binary collation keeps token, owner and purpose comparisons exact:
/// "U1" and "u1" are different users.
pub const TEMP_TOKENS_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS temp_tokens (
        token VARCHAR(128) NOT NULL PRIMARY KEY,
        user_id VARCHAR(128) NOT NULL,
        instance_id VARCHAR(128) NOT NULL,
        purpose VARCHAR(128) NOT NULL,
        info TEXT NOT NULL,
        expiration BIGINT NOT NULL,
        INDEX idx_temp_tokens_owner (instance_id, user_id, purpose)
    ) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin
"#;

/// Attempts at inserting a freshly generated token before giving up
const MAX_INSERT_ATTEMPTS: usize = 3;

/// MySQL implementation of TempTokenRepository
pub struct MySqlTempTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
    /// Random bytes per generated token
    token_length_bytes: usize,
}

impl MySqlTempTokenRepository {
    /// Create a new MySQL temp token repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    /// * `token_length_bytes` - Random bytes behind each generated token,
    ///   capped at `MAX_TOKEN_LENGTH_BYTES` to fit the token column
    pub fn new(pool: MySqlPool, token_length_bytes: usize) -> Self {
        Self {
            pool,
            token_length_bytes: token_length_bytes.min(MAX_TOKEN_LENGTH_BYTES),
        }
    }

    /// Create the `temp_tokens` table if it does not exist
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(TEMP_TOKENS_SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to create temp_tokens table: {}", e),
            })?;
        tracing::info!(event = "temp_token_schema_ready", "temp_tokens table ready");
        Ok(())
    }

    /// Convert database row to TempToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<TempToken, DomainError> {
        let info: String = row.try_get("info").map_err(|e| DomainError::Internal {
            message: format!("Failed to get info: {}", e),
        })?;

        Ok(TempToken {
            token: row.try_get("token").map_err(|e| DomainError::Internal {
                message: format!("Failed to get token: {}", e),
            })?,
            user_id: row.try_get("user_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get user_id: {}", e),
            })?,
            instance_id: row.try_get("instance_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get instance_id: {}", e),
            })?,
            purpose: row.try_get("purpose").map_err(|e| DomainError::Internal {
                message: format!("Failed to get purpose: {}", e),
            })?,
            info: decode_info(&info)?,
            expiration: row.try_get("expiration").map_err(|e| DomainError::Internal {
                message: format!("Failed to get expiration: {}", e),
            })?,
        })
    }

    async fn insert(&self, token: &TempToken, info: &str) -> Result<(), sqlx::Error> {
        let query = r#"
            INSERT INTO temp_tokens (
                token, user_id, instance_id, purpose, info, expiration
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&token.token)
            .bind(&token.user_id)
            .bind(&token.instance_id)
            .bind(&token.purpose)
            .bind(info)
            .bind(token.expiration)
            .execute(&self.pool)
            .await
            .map(|_| ())
    }
}

/// Serialize the info map for the `info` column
pub(crate) fn encode_info(info: &HashMap<String, String>) -> Result<String, DomainError> {
    serde_json::to_string(info).map_err(|e| DomainError::Internal {
        message: format!("Failed to encode token info: {}", e),
    })
}

/// Parse the `info` column; an empty column is an empty map
pub(crate) fn decode_info(raw: &str) -> Result<HashMap<String, String>, DomainError> {
    if raw.trim().is_empty() {
        return Ok(HashMap::new());
    }
    serde_json::from_str(raw).map_err(|e| DomainError::Internal {
        message: format!("Failed to decode token info: {}", e),
    })
}

fn is_duplicate_key(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

#[async_trait]
impl TempTokenRepository for MySqlTempTokenRepository {
    async fn add(&self, mut token: TempToken) -> Result<String, DomainError> {
        let info = encode_info(&token.info)?;

        // Caller-chosen tokens get a single attempt
        let generate = token.token.is_empty();
        let attempts = if generate { MAX_INSERT_ATTEMPTS } else { 1 };

        for attempt in 1..=attempts {
            if generate {
                token.token = generate_token_string(self.token_length_bytes);
            }

            match self.insert(&token, &info).await {
                Ok(()) => return Ok(token.token),
                Err(e) if is_duplicate_key(&e) => {
                    tracing::warn!(
                        attempt = attempt,
                        event = "temp_token_collision",
                        "Temp token already exists"
                    );
                }
                Err(e) => {
                    return Err(DomainError::Internal {
                        message: format!("Failed to save temp token: {}", e),
                    })
                }
            }
        }

        Err(DomainError::InvalidArgument {
            message: "Temp token already exists".to_string(),
        })
    }

    async fn get_by_token(&self, token: &str) -> Result<Option<TempToken>, DomainError> {
        let query = r#"
            SELECT token, user_id, instance_id, purpose, info, expiration
            FROM temp_tokens
            WHERE token = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find temp token: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn query_by_user(
        &self,
        instance_id: &str,
        user_id: &str,
        purpose: Option<&str>,
    ) -> Result<Vec<TempToken>, DomainError> {
        let query = r#"
            SELECT token, user_id, instance_id, purpose, info, expiration
            FROM temp_tokens
            WHERE instance_id = ?
                AND user_id = ?
                AND (? IS NULL OR purpose = ?)
        "#;

        let rows = sqlx::query(query)
            .bind(instance_id)
            .bind(user_id)
            .bind(purpose)
            .bind(purpose)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find user temp tokens: {}", e),
            })?;

        rows.iter().map(Self::row_to_token).collect()
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM temp_tokens WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete temp token: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_for_user(
        &self,
        instance_id: &str,
        user_id: &str,
        purpose: Option<&str>,
    ) -> Result<usize, DomainError> {
        let query = r#"
            DELETE FROM temp_tokens
            WHERE instance_id = ?
                AND user_id = ?
                AND (? IS NULL OR purpose = ?)
        "#;

        let result = sqlx::query(query)
            .bind(instance_id)
            .bind(user_id)
            .bind(purpose)
            .bind(purpose)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete user temp tokens: {}", e),
            })?;

        Ok(result.rows_affected() as usize)
    }

    async fn health_check(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::Internal {
                message: format!("Database health check failed: {}", e),
            })
    }
}
