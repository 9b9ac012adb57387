//! Router-wide layers and request validation helpers

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::error::{ApiError, ApiResult};
use crate::store::TaskId;

/// Permissive CORS for browser clients
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Request/response tracing at INFO level
pub fn logging_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

/// Parse the `{id}` path segment, rejecting anything non-numeric.
pub fn validate_task_id(raw: &str) -> ApiResult<TaskId> {
    raw.parse::<TaskId>().map_err(|_| ApiError::InvalidTaskId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_task_id_accepts_integers() {
        assert_eq!(validate_task_id("1").unwrap(), 1);
        assert_eq!(validate_task_id("42").unwrap(), 42);
        assert_eq!(validate_task_id("-7").unwrap(), -7);
    }

    #[test]
    fn test_validate_task_id_rejects_non_numeric() {
        assert!(matches!(
            validate_task_id("abc"),
            Err(ApiError::InvalidTaskId)
        ));
        assert!(matches!(
            validate_task_id("1.5"),
            Err(ApiError::InvalidTaskId)
        ));
        assert!(matches!(validate_task_id(""), Err(ApiError::InvalidTaskId)));
    }
}
