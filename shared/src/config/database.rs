//! Database configuration module

use serde::{Deserialize, Serialize};

/// Database configuration for MySQL connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,

    /// Maximum lifetime of a connection in seconds
    pub max_lifetime: u64,

    /// Create the temp token table on startup if it is missing
    #[serde(default = "default_ensure_schema")]
    pub ensure_schema: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://localhost:3306/user_management"),
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
            ensure_schema: default_ensure_schema(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    ///
    /// Returns `None` when `DATABASE_URL` is not set.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("DATABASE_URL").ok().filter(|url| !url.is_empty())?;
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);
        let connect_timeout = std::env::var("DATABASE_CONNECT_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);
        let ensure_schema = std::env::var("DATABASE_ENSURE_SCHEMA")
            .map(|v| v != "false" && v != "0")
            .unwrap_or_else(|_| default_ensure_schema());

        Some(Self {
            url,
            max_connections,
            connect_timeout,
            ensure_schema,
            ..Default::default()
        })
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

fn default_ensure_schema() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = DatabaseConfig::new("mysql://db:3306/um").with_max_connections(25);
        assert_eq!(config.url, "mysql://db:3306/um");
        assert_eq!(config.max_connections, 25);
        assert_eq!(config.connect_timeout, 30);
        assert!(config.ensure_schema);
    }
}
