use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Name reported by the health and root endpoints.
pub const SERVICE_NAME: &str = "Contentstack BFF";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// ISO-8601, UTC, millisecond precision.
    pub timestamp: String,
    pub service: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            service: SERVICE_NAME.to_string(),
        }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
