//! Health check handler

use axum::Json;

use crate::api::models::HealthResponse;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::SERVICE_NAME;

    #[tokio::test]
    async fn test_health_reports_service_identity() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, SERVICE_NAME);
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }
}
