use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::{Predictor, TreeEnsemble};
use crate::error::{CropcastError, Result};

/// Lifecycle of the startup-loaded artifact.
///
/// `LoadFailed` is terminal: the process keeps serving and every prediction
/// fails with [`CropcastError::ModelUnavailable`]. There is no retry.
#[derive(Clone)]
pub enum ModelState {
    Unloaded,
    Loaded {
        predictor: Arc<dyn Predictor>,
        loaded_at: DateTime<Utc>,
    },
    LoadFailed(String),
}

impl ModelState {
    /// Never fails; a missing or broken artifact becomes `LoadFailed`.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::warn!("Model file not found at {}", path.display());
            return ModelState::LoadFailed(format!("{} does not exist", path.display()));
        }

        match TreeEnsemble::load(path) {
            Ok(model) => {
                tracing::info!(
                    "Loaded model from {} ({} trees, {} classes)",
                    path.display(),
                    model.tree_count(),
                    model.classes().len()
                );
                tracing::debug!("Model features: {}", model.feature_names().join(", "));
                ModelState::loaded(Arc::new(model))
            }
            Err(e) => {
                tracing::warn!("Failed to load model from {}: {}", path.display(), e);
                ModelState::LoadFailed(e.to_string())
            }
        }
    }

    pub fn loaded(predictor: Arc<dyn Predictor>) -> Self {
        ModelState::Loaded {
            predictor,
            loaded_at: Utc::now(),
        }
    }

    pub fn predictor(&self) -> Result<&Arc<dyn Predictor>> {
        match self {
            ModelState::Loaded { predictor, .. } => Ok(predictor),
            ModelState::Unloaded | ModelState::LoadFailed(_) => {
                Err(CropcastError::ModelUnavailable)
            }
        }
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        match self {
            ModelState::Loaded { loaded_at, .. } => Some(*loaded_at),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelState::Unloaded => "unloaded",
            ModelState::Loaded { .. } => "loaded",
            ModelState::LoadFailed(_) => "load-failed",
        }
    }
}

impl std::fmt::Debug for ModelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelState::LoadFailed(reason) => write!(f, "LoadFailed({})", reason),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
