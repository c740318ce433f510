pub mod confidence;
pub mod rules;
pub mod validation;
pub mod yield_estimator;

pub use confidence::SyntheticConfidence;
pub use rules::{CascadeOutcome, CropRuleCascade};
pub use yield_estimator::YieldEstimator;
