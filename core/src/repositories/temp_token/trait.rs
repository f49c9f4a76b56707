//! Temp token repository trait defining the interface for temporary token persistence.

use async_trait::async_trait;

use crate::domain::entities::temp_token::TempToken;
use crate::errors::DomainError;

/// Repository trait for TempToken persistence operations
///
/// Implementations own atomicity: the service performs no locking of its own,
/// so two callers racing on the same token (validate vs. delete) see whatever
/// ordering the store provides.
///
/// Purpose filters are optional; `None` selects every purpose of the owner.
#[async_trait]
pub trait TempTokenRepository: Send + Sync {
    /// Persist a new temp token
    ///
    /// If `token.token` is empty the repository assigns a fresh token string.
    ///
    /// # Returns
    /// * `Ok(String)` - The token string the record is stored under
    /// * `Err(DomainError)` - Save failed (e.g., duplicate token)
    ///
    /// # Example
    /// ```no_run
    /// # use std::collections::HashMap;
    /// # use um_core::repositories::TempTokenRepository;
    /// # use um_core::domain::entities::temp_token::TempToken;
    /// # async fn example(repo: &impl TempTokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let record = TempToken::new("user-1", "instance-1", "password-reset", HashMap::new(), 1_700_000_000);
    /// let token = repo.add(record).await?;
    /// println!("Issued temp token {}", token);
    /// # Ok(())
    /// # }
    /// ```
    async fn add(&self, token: TempToken) -> Result<String, DomainError>;

    /// Find a temp token by its token string
    ///
    /// # Returns
    /// * `Ok(Some(TempToken))` - Token found
    /// * `Ok(None)` - No token stored under this string
    /// * `Err(DomainError)` - Lookup failed
    async fn get_by_token(&self, token: &str) -> Result<Option<TempToken>, DomainError>;

    /// Find all temp tokens of a user, optionally restricted to one purpose
    ///
    /// Expired records are returned as well. Order is implementation-defined.
    async fn query_by_user(
        &self,
        instance_id: &str,
        user_id: &str,
        purpose: Option<&str>,
    ) -> Result<Vec<TempToken>, DomainError>;

    /// Delete a temp token by its token string
    ///
    /// # Returns
    /// * `Ok(true)` - Token was deleted
    /// * `Ok(false)` - Token did not exist
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError>;

    /// Delete all temp tokens of a user, optionally restricted to one purpose
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens deleted
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_all_for_user(
        &self,
        instance_id: &str,
        user_id: &str,
        purpose: Option<&str>,
    ) -> Result<usize, DomainError>;

    /// Check if a token string is currently stored
    async fn exists(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_token(token).await?.is_some())
    }

    /// Check that the backing store is reachable
    async fn health_check(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
