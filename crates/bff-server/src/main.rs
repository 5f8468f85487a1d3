//! Contentstack BFF binary.

use anyhow::Context;
use bff_core::ClientConfig;
use bff_graphql::HttpExecutor;
use bff_server::{AppState, ServerSettings, metrics::init_metrics, run_server_with_state};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env.local wins over .env; neither is required.
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = ServerSettings::from_env().context("Invalid HOST/PORT settings")?;
    let addr = settings
        .addr()
        .with_context(|| format!("Invalid listen address {}:{}", settings.host, settings.port))?;

    // Fail fast: without a complete client configuration no listener is bound.
    let client_config = ClientConfig::from_env()
        .context("Missing or invalid Contentstack configuration, check .env.local")?;

    tracing::info!("Starting Contentstack BFF v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Region: {}", client_config.region());
    tracing::info!("Environment: {}", client_config.environment());
    if let Some(branch) = client_config.branch() {
        tracing::info!("Branch: {}", branch);
    }
    if client_config.live_preview().enabled {
        tracing::info!("Live preview enabled");
    }
    if client_config.timeout().is_none() {
        tracing::warn!("CONTENTSTACK_TIMEOUT_MS not set, upstream calls have no timeout");
    }

    let executor = HttpExecutor::new(&client_config).context("Failed to build GraphQL client")?;
    let state = AppState::from_http_executor(executor);

    let prometheus_handle = init_metrics().context("Failed to install metrics recorder")?;

    run_server_with_state(addr, state, prometheus_handle).await?;

    Ok(())
}
