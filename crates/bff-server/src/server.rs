use std::net::SocketAddr;

use axum::{Router, middleware, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;

use crate::handlers::{
    entries::get_entries, fallback::route_not_found, health::health_check,
    metrics::metrics_handler, personalized::get_personalized_config, root::index,
};
use crate::metrics::detached_handle;
use crate::middleware::{
    cors_layer, logging_layer, panic_layer, propagate_request_id_layer, set_request_id_layer,
};
use crate::state::AppState;

/// Creates a router with the given application state and metrics handle.
pub fn create_router_with_state(state: AppState, prometheus_handle: PrometheusHandle) -> Router {
    // Outermost first: the id must exist before the logging span opens.
    let middleware_stack = ServiceBuilder::new()
        .layer(set_request_id_layer())
        .layer(logging_layer())
        .layer(propagate_request_id_layer())
        .layer(cors_layer())
        .layer(panic_layer());

    // Router for metrics endpoint (different state)
    let metrics_router = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    // Main application router
    let app_router = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/entries", get(get_entries))
        .route("/api/personalized-config", get(get_personalized_config))
        .with_state(state);

    Router::new()
        .merge(app_router)
        .merge(metrics_router)
        .fallback(route_not_found)
        // HTTP metrics middleware
        .layer(middleware::from_fn(
            crate::metrics::http::http_metrics_middleware,
        ))
        .layer(middleware_stack)
}

/// Creates a router whose `/metrics` endpoint is backed by a recorder that
/// is not installed globally.
pub fn create_router(state: AppState) -> Router {
    create_router_with_state(state, detached_handle())
}

/// Runs the server with the given state and metrics handle.
pub async fn run_server_with_state(
    addr: SocketAddr,
    state: AppState,
    prometheus_handle: PrometheusHandle,
) -> Result<(), std::io::Error> {
    let app = create_router_with_state(state, prometheus_handle);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
