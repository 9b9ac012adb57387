//! Request and response models for the HTTP API

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::store::TaskId;
use crate::version::SERVICE_NAME;

/// Incoming task body for create and update requests
///
/// Every field defaults to its zero value, so a partial or empty body still
/// binds. The server owns `id`, `status` and `created_at` on create; they are
/// accepted here and ignored so that clients echoing a full task back do not
/// get rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPayload {
    #[serde(default)]
    pub id: TaskId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

impl HealthResponse {
    /// Build a healthy response stamped with the current time.
    pub fn new() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Confirmation body for operations that return no record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_binds_to_zero_values() {
        let payload: TaskPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.id, 0);
        assert_eq!(payload.title, "");
        assert_eq!(payload.description, "");
        assert_eq!(payload.status, "");
        assert_eq!(payload.created_at, "");
    }

    #[test]
    fn test_partial_body_binds_known_fields() {
        let payload: TaskPayload =
            serde_json::from_str(r#"{"title": "Ship it", "status": "done"}"#).unwrap();
        assert_eq!(payload.title, "Ship it");
        assert_eq!(payload.status, "done");
        assert_eq!(payload.description, "");
    }

    #[test]
    fn test_wrong_typed_field_is_rejected() {
        let result = serde_json::from_str::<TaskPayload>(r#"{"title": 7}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_health_response_fields() {
        let health = HealthResponse::new();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, SERVICE_NAME);
        assert!(chrono::DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
    }

    #[test]
    fn test_message_response_serializes_to_message_key() {
        let body = MessageResponse::new("Task deleted successfully");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "Task deleted successfully"})
        );
    }
}
