//! Strategy inference server binary.

use tracing_subscriber::EnvFilter;

use strategy_inference::adapters::http::router;
use strategy_inference::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let addr = config.server.socket_addr()?;
    let app = router(&config);

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        pipeline_endpoint = config.features.expose_pipeline_endpoint,
        "Starting strategy inference server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured directive. Production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await;
}

/// Resolves once the signal fires. A listener that fails never resolves, so
/// the server keeps running instead of shutting down at startup.
async fn wait_for_signal<F>(signal: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(error) = signal.await {
        tracing::error!(%error, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn received_signal_resolves() {
        let fired = async { Ok::<(), std::io::Error>(()) };

        let waited = tokio::time::timeout(Duration::from_millis(100), wait_for_signal(fired)).await;

        assert!(waited.is_ok());
    }

    #[tokio::test]
    async fn failed_listener_keeps_waiting() {
        let failing = async { Err::<(), _>(std::io::Error::other("no signal")) };

        let waited = tokio::time::timeout(Duration::from_millis(50), wait_for_signal(failing)).await;

        assert!(waited.is_err());
    }
}
