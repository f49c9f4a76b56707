//! Shared configuration and common types for the user-management server
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types loaded from the environment
//! - Error and health response structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, LogFormat, LoggingConfig, ServerConfig,
    TempTokenConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, HealthStatus, ServiceHealth};
