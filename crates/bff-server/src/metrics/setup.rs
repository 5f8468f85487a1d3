//! Metrics setup and initialization.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::info;

use super::{http::register_http_metrics, upstream::register_upstream_metrics};

/// Buckets para histogramas (en segundos). Upstream calls dominate, so the
/// range reaches further than a purely in-process service would need.
const LATENCY_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0,
];

fn builder() -> Result<PrometheusBuilder, BuildError> {
    PrometheusBuilder::new().set_buckets(LATENCY_BUCKETS)
}

/// Installs the global recorder and returns the handle for `/metrics`.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = builder()?.install_recorder()?;

    register_http_metrics();
    register_upstream_metrics();

    info!("Metrics system initialized");
    Ok(handle)
}

/// Returns a handle whose recorder is not installed globally.
///
/// Used when building routers in tests, where installing a global recorder
/// more than once would fail.
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}
