//! BFF Server - HTTP backend-for-frontend for Contentstack
//!
//! Axum server exposing REST endpoints that forward to the Contentstack
//! GraphQL Delivery API and reshape the response.
//!
//! ## Endpoints
//!
//! - `GET /` - Service index
//! - `GET /health` - Health check
//! - `GET /api/entries` - Entries of a content type
//! - `GET /api/personalized-config` - Personalization audiences
//! - `GET /metrics` - Prometheus metrics

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod server;
pub mod settings;
pub mod state;

pub use error::{AppError, ErrorResponse};
pub use handlers::health::{HealthResponse, SERVICE_NAME};
pub use handlers::root::RootResponse;
pub use server::{create_router, create_router_with_state, run_server_with_state};
pub use settings::ServerSettings;
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
