//! Server configuration

use resale_sdk::PredictorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,

    /// Load the model artifact at startup instead of on the first request
    pub preload_model: bool,

    /// Prediction service settings
    pub predictor: PredictorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            preload_model: true,
            predictor: PredictorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Reads `config/server.{yaml,toml,json}` if present, then `RESALE_*`
    /// variables. Nested keys use a double underscore, e.g.
    /// `RESALE_PREDICTOR__MODEL_PATH`.
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();
        Self::load_from("config/server")
    }

    /// Load configuration from `path` (extension optional) plus environment
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let name = path.as_ref().to_string_lossy().to_string();

        let config: Self = config::Config::builder()
            .add_source(config::File::with_name(&name).required(false))
            .add_source(
                config::Environment::with_prefix("RESALE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config '{}': {}", name, e))?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))?;

        config
            .predictor
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid predictor config: {}", e))?;
        Ok(config)
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
