//! API error types and HTTP response mapping

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a handler can surface to the client
#[derive(Error, Debug)]
pub enum ApiError {
    /// The `{id}` path segment is not an integer.
    #[error("Invalid task ID")]
    InvalidTaskId,

    /// No task exists with the requested id.
    #[error("Task not found")]
    TaskNotFound,

    /// The request body could not be read as a task payload.
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidTaskId => StatusCode::BAD_REQUEST,
            ApiError::TaskNotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Wire shape of every error response: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        tracing::debug!("request failed: {} {:?}", status, body.error);
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Convenience result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_task_id_maps_to_bad_request() {
        let err = ApiError::InvalidTaskId;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid task ID");
    }

    #[test]
    fn test_task_not_found_maps_to_not_found() {
        let err = ApiError::TaskNotFound;
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Task not found");
    }

    #[test]
    fn test_bad_request_carries_detail() {
        let err = ApiError::BadRequest("expected value at line 1 column 1".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "expected value at line 1 column 1");
    }

    #[test]
    fn test_error_response_serializes_to_error_key() {
        let body = ErrorResponse {
            error: "Task not found".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Task not found"}));
    }
}
