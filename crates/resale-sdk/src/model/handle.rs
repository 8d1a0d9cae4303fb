//! Shared model slot
//!
//! The artifact is loaded at most once and shared read-only by every
//! request. Loading is lazy and thread-safe: the first caller takes the
//! load lock and loads, concurrent callers wait on that lock and then reuse
//! the result. The slot itself is only write-locked to swap in a finished
//! model, so readers such as health checks never wait on a load. A failed
//! load leaves the slot empty so the next request tries again, which lets a
//! fixed artifact be picked up without a restart.

use super::error::ModelLoadError;
use super::loader::{load_model, LoadedModel};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

/// Where the handle gets its model from
#[derive(Debug, Clone, PartialEq)]
pub enum ModelSource {
    /// JSON artifact on disk
    File(PathBuf),
    /// Model supplied in-process; cannot be reloaded
    InMemory,
}

/// Lazily loaded, reloadable model shared across requests
#[derive(Debug)]
pub struct ModelHandle {
    source: ModelSource,
    slot: RwLock<Option<Arc<LoadedModel>>>,
    load_lock: Mutex<()>,
    load_timeout: Duration,
}

impl ModelHandle {
    /// Handle that loads `path` on first use
    pub fn from_path(path: impl Into<PathBuf>, load_timeout: Duration) -> Self {
        Self {
            source: ModelSource::File(path.into()),
            slot: RwLock::new(None),
            load_lock: Mutex::new(()),
            load_timeout,
        }
    }

    /// Handle around an already built model
    pub fn from_loaded(model: LoadedModel) -> Self {
        Self {
            source: ModelSource::InMemory,
            slot: RwLock::new(Some(Arc::new(model))),
            load_lock: Mutex::new(()),
            load_timeout: Duration::ZERO,
        }
    }

    pub fn source(&self) -> &ModelSource {
        &self.source
    }

    /// The current model, loading it first if necessary
    pub async fn get(&self) -> Result<Arc<LoadedModel>, ModelLoadError> {
        if let Some(model) = self.current().await {
            return Ok(model);
        }

        let _loading = self.load_lock.lock().await;
        // Another request may have loaded it while we waited for the lock
        if let Some(model) = self.current().await {
            return Ok(model);
        }

        let model = Arc::new(self.load().await?);
        *self.slot.write().await = Some(Arc::clone(&model));
        Ok(model)
    }

    /// Re-read the artifact and swap it in
    ///
    /// On failure the previously loaded model, if any, stays in service.
    pub async fn reload(&self) -> Result<Arc<LoadedModel>, ModelLoadError> {
        if self.source == ModelSource::InMemory {
            return self.current().await.ok_or_else(|| {
                ModelLoadError::InvalidModel("no model artifact configured".to_string())
            });
        }

        let _loading = self.load_lock.lock().await;
        match self.load().await {
            Ok(model) => {
                let model = Arc::new(model);
                *self.slot.write().await = Some(Arc::clone(&model));
                info!("Model reloaded: {}", model.name());
                Ok(model)
            }
            Err(e) => {
                warn!("Model reload failed, keeping current model: {}", e);
                Err(e)
            }
        }
    }

    /// The loaded model, without triggering a load
    pub async fn current(&self) -> Option<Arc<LoadedModel>> {
        self.slot.read().await.clone()
    }

    pub async fn is_loaded(&self) -> bool {
        self.slot.read().await.is_some()
    }

    async fn load(&self) -> Result<LoadedModel, ModelLoadError> {
        let path = match &self.source {
            ModelSource::File(path) => path.clone(),
            ModelSource::InMemory => {
                return Err(ModelLoadError::InvalidModel(
                    "no model artifact configured".to_string(),
                ))
            }
        };

        info!("Loading model artifact from {}", path.display());
        let task = tokio::task::spawn_blocking(move || load_model(path));

        match tokio::time::timeout(self.load_timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(ModelLoadError::TaskFailed(join_error.to_string())),
            Err(_) => Err(ModelLoadError::Timeout(self.load_timeout)),
        }
    }
}
