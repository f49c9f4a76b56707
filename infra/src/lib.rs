//! # Infrastructure Layer
//!
//! Concrete persistence for the temp token service, following Clean
//! Architecture principles: the core crate owns the `TempTokenRepository`
//! trait and this crate implements it on MySQL through SQLx.
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use um_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration for infrastructure services, shared with the api crate

    pub use um_shared::config::database::DatabaseConfig;
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::internal(err.to_string())
    }
}
