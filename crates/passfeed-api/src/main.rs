//! # passfeed-api: Binary Entry Point
//!
//! Reads configuration from the environment, installs the tracing
//! subscriber and Prometheus recorder, and serves the router.

use metrics_exporter_prometheus::PrometheusBuilder;
use passfeed_api::config::AppConfig;
use passfeed_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let service = passfeed_api::bootstrap::bootstrap(&config).map_err(|e| {
        tracing::error!("bootstrap failed: {e}");
        e
    })?;

    let mut state = AppState::new(service);
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => state = state.with_metrics(handle),
        Err(e) => tracing::warn!("Prometheus recorder not installed: {e}. /metrics will return 503."),
    }

    let app = passfeed_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("passfeed listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
