//! Configuration module with business-specific sub-modules
//!
//! - `database` - MySQL connection pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//! - `temp_token` - Temporary token lifetime and generation policy

pub mod database;
pub mod environment;
pub mod server;
pub mod temp_token;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use temp_token::TempTokenConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration; `None` selects the in-memory token store
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Temporary token policy
    #[serde(default)]
    pub temp_token: TempTokenConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: None,
            temp_token: TempTokenConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Logging defaults follow the detected environment; `LOG_LEVEL` and
    /// `LOG_FORMAT` override them.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            temp_token: TempTokenConfig::from_env(),
            logging: LoggingConfig::for_environment(environment).with_env_overrides(),
        }
    }

    /// Whether a persistent database is configured
    pub fn uses_database(&self) -> bool {
        self.database.is_some()
    }
}
