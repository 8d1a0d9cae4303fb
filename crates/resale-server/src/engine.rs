//! Prediction service initialization
//!
//! Converts server configuration into a `PricePredictor` and optionally loads
//! the model before the first request arrives.

use crate::config::ServerConfig;
use anyhow::Result;
use resale_sdk::{PricePredictor, PricePredictorBuilder};
use tracing::{info, warn};

/// Initialize the prediction service
///
/// A failed preload is logged, not fatal: the model handle retries on the
/// next request, so a missing artifact can be fixed without a restart.
pub async fn init_predictor(config: &ServerConfig) -> Result<PricePredictor> {
    let predictor = PricePredictorBuilder::new()
        .with_config(config.predictor.clone())
        .build()?;

    info!(
        "Predictor configured: model_path={}, strict_categories={}, enforce_ranges={}",
        config.predictor.model_path.display(),
        config.predictor.strict_categories,
        config.predictor.enforce_ranges
    );

    if config.preload_model {
        if let Err(e) = predictor.warm_up().await {
            warn!("Model preload failed, will retry on first request: {}", e);
        }
    }

    Ok(predictor)
}
