pub mod cascade;
pub mod cotton;
pub mod maize;
pub mod rice;
pub mod wheat;

pub use cascade::{CascadeOutcome, CropRuleCascade};

use crate::models::{Crop, CropRecommendationRequest};

/// A single threshold rule in the crop recommendation cascade.
pub trait CropRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Crop recommended when the rule matches
    fn crop(&self) -> Crop;

    /// True when the soil and weather conditions satisfy this rule
    fn matches(&self, conditions: &CropRecommendationRequest) -> bool;
}

/// Inclusive on both ends.
pub(crate) fn within(value: f64, low: f64, high: f64) -> bool {
    value >= low && value <= high
}
