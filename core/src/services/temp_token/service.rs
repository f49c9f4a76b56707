//! Main temp token service implementation

use std::sync::Arc;

use crate::domain::entities::temp_token::TempToken;
use crate::domain::value_objects::{ServiceStatus, TempTokenInfo};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::temp_token::TempTokenRepository;

use super::config::TempTokenServiceConfig;
use super::issuer::{ClockTokenIssuer, TokenIssuer};
use super::reporter::{CleanupReporter, TracingCleanupReporter};
use super::types::{GenerateTempTokenRequest, TempTokenRef, UserTempTokensQuery};

/// Confirmation message of delete and purge
pub const DELETED_MESSAGE: &str = "deleted";

/// Temp token service
///
/// Holds no mutable state of its own. Everything lives in the repository,
/// and two calls racing on the same token are ordered by it alone: a
/// validate that sees an expired record and a concurrent delete may both
/// try to remove it.
pub struct TempTokenService<R: TempTokenRepository + ?Sized> {
    /// Token persistence
    repository: Arc<R>,
    /// Expiration policy
    issuer: Arc<dyn TokenIssuer>,
    /// Receives swallowed cleanup failures
    reporter: Arc<dyn CleanupReporter>,
    /// Service configuration
    config: TempTokenServiceConfig,
}

impl<R: TempTokenRepository + ?Sized> TempTokenService<R> {
    /// Create a new temp token service on the system clock
    ///
    /// Cleanup failures are logged through `tracing`.
    pub fn new(repository: Arc<R>, config: TempTokenServiceConfig) -> Self {
        Self::with_collaborators(
            repository,
            Arc::new(ClockTokenIssuer::default()),
            Arc::new(TracingCleanupReporter),
            config,
        )
    }

    /// Create a new temp token service with explicit collaborators
    ///
    /// # Arguments
    ///
    /// * `repository` - Token persistence
    /// * `issuer` - Expiration policy and time source
    /// * `reporter` - Receives failures of best-effort cleanup
    /// * `config` - Service configuration
    pub fn with_collaborators(
        repository: Arc<R>,
        issuer: Arc<dyn TokenIssuer>,
        reporter: Arc<dyn CleanupReporter>,
        config: TempTokenServiceConfig,
    ) -> Self {
        Self {
            repository,
            issuer,
            reporter,
            config,
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Generate a temp token
    ///
    /// An expiration of zero is replaced by now plus the configured default
    /// lifetime.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The token string assigned by the repository
    /// * `Err(DomainError::InvalidArgument)` - Purpose is empty
    /// * `Err(DomainError::Internal)` - The repository rejected the record
    pub async fn generate(&self, request: GenerateTempTokenRequest) -> DomainResult<String> {
        if request.purpose.is_empty() {
            return Err(DomainError::missing_argument());
        }

        let expiration = if request.expiration == 0 {
            self.issuer.expiration_after(self.config.default_lifetime)
        } else {
            request.expiration
        };

        let record = TempToken::new(
            request.user_id,
            request.instance_id,
            request.purpose,
            request.info,
            expiration,
        );
        let purpose = record.purpose.clone();
        let instance_id = record.instance_id.clone();

        let token = self.repository.add(record).await.map_err(|e| {
            tracing::error!(
                instance_id = %instance_id,
                purpose = %purpose,
                error = %e,
                event = "temp_token_store_failed",
                "Failed to store temp token"
            );
            e.into_internal()
        })?;

        tracing::debug!(
            instance_id = %instance_id,
            purpose = %purpose,
            expiration = expiration,
            event = "temp_token_generated",
            "Temp token generated"
        );

        Ok(token)
    }

    /// Validate a temp token
    ///
    /// An expired token is deleted on the way out. The delete is best
    /// effort: whether or not it succeeds the call fails with
    /// "token expired".
    ///
    /// # Returns
    ///
    /// * `Ok(TempTokenInfo)` - The token is live
    /// * `Err(DomainError::InvalidArgument)` - Token empty or expired
    /// * `Err(DomainError::Internal)` - Lookup failed or token unknown
    pub async fn validate(&self, request: TempTokenRef) -> DomainResult<TempTokenInfo> {
        if request.token.is_empty() {
            return Err(DomainError::missing_argument());
        }

        let record = self
            .repository
            .get_by_token(&request.token)
            .await
            .map_err(DomainError::into_internal)?
            .ok_or_else(|| DomainError::internal("temp token not found"))?;

        let now = self.issuer.now();
        if record.is_expired_at(now) {
            if let Err(e) = self.repository.delete_by_token(&record.token).await {
                self.reporter.report_cleanup_failure(&record.token, &e);
            }
            tracing::info!(
                instance_id = %record.instance_id,
                purpose = %record.purpose,
                expiration = record.expiration,
                event = "temp_token_expired",
                "Rejected expired temp token"
            );
            return Err(DomainError::token_expired());
        }

        Ok(record.into())
    }

    /// List all temp tokens of a user
    ///
    /// Expired records are included; callers validate tokens individually.
    pub async fn list_for_user(&self, query: UserTempTokensQuery) -> DomainResult<Vec<TempTokenInfo>> {
        if !query.has_owner() {
            return Err(DomainError::missing_argument());
        }

        let records = self
            .repository
            .query_by_user(&query.instance_id, &query.user_id, query.purpose_filter())
            .await
            .map_err(DomainError::into_internal)?;

        Ok(records.into_iter().map(TempTokenInfo::from).collect())
    }

    /// Delete a temp token
    ///
    /// Deleting a token that does not exist succeeds.
    pub async fn delete(&self, request: TempTokenRef) -> DomainResult<ServiceStatus> {
        if request.token.is_empty() {
            return Err(DomainError::missing_argument());
        }

        let existed = self
            .repository
            .delete_by_token(&request.token)
            .await
            .map_err(DomainError::into_internal)?;

        tracing::debug!(existed = existed, event = "temp_token_deleted", "Temp token deleted");

        Ok(ServiceStatus::normal(DELETED_MESSAGE))
    }

    /// Delete every temp token of a user, optionally of one purpose
    ///
    /// The number of removed records is logged, not returned.
    pub async fn purge_for_user(&self, query: UserTempTokensQuery) -> DomainResult<ServiceStatus> {
        if !query.has_owner() {
            return Err(DomainError::missing_argument());
        }

        let count = self
            .repository
            .delete_all_for_user(&query.instance_id, &query.user_id, query.purpose_filter())
            .await
            .map_err(DomainError::into_internal)?;

        tracing::info!(
            instance_id = %query.instance_id,
            purpose = query.purpose_filter().unwrap_or("*"),
            count = count,
            event = "temp_tokens_purged",
            "Purged temp tokens of user"
        );

        Ok(ServiceStatus::normal(DELETED_MESSAGE))
    }
}
