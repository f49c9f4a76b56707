//! Operation status value object returned by delete and purge operations.

use serde::{Deserialize, Serialize};

/// Outcome code of a status-returning operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    Normal,
    Problem,
}

/// Standardized operation status with a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: StatusCode,
    pub msg: String,
}

impl ServiceStatus {
    /// Successful status with the given confirmation message
    pub fn normal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::Normal,
            msg: msg.into(),
        }
    }

    pub fn is_normal(&self) -> bool {
        self.status == StatusCode::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_status_serialization() {
        let status = ServiceStatus::normal("deleted");
        assert!(status.is_normal());

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "NORMAL");
        assert_eq!(json["msg"], "deleted");
    }
}
