// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use keywords::{ExtractorRegistry, KeywordExtractor, RemoteExtractor, StatisticalExtractor};
use server_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,keywords=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Keyword Extraction API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Select the extraction gateway: remote service if configured,
    // in-process statistical backend otherwise
    let gateway: Arc<dyn KeywordExtractor> = match &config.extractor_url {
        Some(url) => {
            tracing::info!(url = %url, "Using remote extraction service");
            let mut remote = RemoteExtractor::new(url.clone());
            if let Some(key) = &config.extractor_api_key {
                remote = remote.with_api_key(key.clone());
            }
            Arc::new(remote)
        }
        None => {
            tracing::warn!("EXTRACTOR_URL not set, using in-process statistical backend");
            Arc::new(StatisticalExtractor::new())
        }
    };

    // One gateway serves every method until dedicated backends are wired in
    let registry = Arc::new(ExtractorRegistry::single_backend(gateway));

    // Build application
    let app = build_app(registry);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/api/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
