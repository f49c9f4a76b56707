//! In-memory implementation of TempTokenRepository
//!
//! Used when no database is configured and as the reference store in tests.
//! Records live for the lifetime of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::temp_token::TempToken;
use crate::errors::DomainError;
use crate::services::temp_token::generate_token_string;

use super::r#trait::TempTokenRepository;

/// In-memory temp token repository keyed by token string
#[derive(Clone)]
pub struct InMemoryTempTokenRepository {
    tokens: Arc<RwLock<HashMap<String, TempToken>>>,
    token_length_bytes: usize,
}

impl InMemoryTempTokenRepository {
    /// Create a new in-memory repository
    pub fn new(token_length_bytes: usize) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            token_length_bytes,
        }
    }

    /// Number of stored records, expired ones included
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for InMemoryTempTokenRepository {
    fn default() -> Self {
        Self::new(um_shared::config::temp_token::DEFAULT_TOKEN_LENGTH_BYTES)
    }
}

#[async_trait]
impl TempTokenRepository for InMemoryTempTokenRepository {
    async fn add(&self, mut token: TempToken) -> Result<String, DomainError> {
        let mut tokens = self.tokens.write().await;

        if token.token.is_empty() {
            token.token = generate_token_string(self.token_length_bytes);
        }

        if tokens.contains_key(&token.token) {
            return Err(DomainError::InvalidArgument {
                message: "Temp token already exists".to_string(),
            });
        }

        let key = token.token.clone();
        tokens.insert(key.clone(), token);
        Ok(key)
    }

    async fn get_by_token(&self, token: &str) -> Result<Option<TempToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).cloned())
    }

    async fn query_by_user(
        &self,
        instance_id: &str,
        user_id: &str,
        purpose: Option<&str>,
    ) -> Result<Vec<TempToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .values()
            .filter(|t| t.matches_owner(instance_id, user_id, purpose))
            .cloned()
            .collect())
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        Ok(tokens.remove(token).is_some())
    }

    async fn delete_all_for_user(
        &self,
        instance_id: &str,
        user_id: &str,
        purpose: Option<&str>,
    ) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let initial_count = tokens.len();

        tokens.retain(|_, t| !t.matches_owner(instance_id, user_id, purpose));

        Ok(initial_count - tokens.len())
    }
}
