//! Artifact-backed prediction.
//!
//! A [`Predictor`] is an externally trained model loaded once at startup and
//! shared read-only by every request. This service never trains or mutates
//! it; it only assembles the tabular input and asks for labels.

pub mod frame;
pub mod state;
pub mod tree_ensemble;

pub use frame::FeatureFrame;
pub use state::ModelState;
pub use tree_ensemble::TreeEnsemble;

use crate::error::{CropcastError, Result};

pub trait Predictor: Send + Sync {
    /// One label per row of `frame`.
    fn predict(&self, frame: &FeatureFrame) -> Result<Vec<String>>;

    /// Column names the artifact was fit with, in order.
    fn feature_names(&self) -> &[String];

    /// Label for a single-row frame. An empty answer is an error.
    fn predict_one(&self, frame: &FeatureFrame) -> Result<String> {
        self.predict(frame)?
            .into_iter()
            .next()
            .ok_or_else(|| CropcastError::Prediction("model returned no prediction".into()))
    }
}
