//! HDB Resale Price Prediction HTTP Server
//!
//! Provides a REST API for predicting resale flat prices.

use anyhow::Result;
use resale_server::{api, config::ServerConfig, engine};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!("Loaded configuration: {:?}", config);

    // Initialize prediction service
    let predictor = engine::init_predictor(&config).await?;
    info!("Prediction service initialized");

    let app = api::create_router(Arc::new(predictor));

    // Start server
    let addr = config.bind_address();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Vocabulary: http://{}/v1/vocabulary", addr);
    info!("  Prediction API: POST http://{}/v1/predict", addr);
    info!("  Reload model: POST http://{}/v1/model/reload", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(log_level: &str) -> Result<()> {
    let default_filter = format!(
        "resale_server={level},resale_sdk={level},resale_core={level},tower_http=debug",
        level = log_level
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
