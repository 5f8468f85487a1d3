//! Service index.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub health: &'static str,
    pub entries: &'static str,
    pub personalized_config: &'static str,
    pub metrics: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: "Contentstack BFF API",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: Endpoints {
                health: "/health",
                entries: "/api/entries",
                personalized_config: "/api/personalized-config",
                metrics: "/metrics",
            },
        }
    }
}

pub async fn index() -> Json<RootResponse> {
    Json(RootResponse::default())
}
