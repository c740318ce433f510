use serde::{Deserialize, Serialize};

use super::Crop;
use crate::constants::{CROP_INPUT_FEATURES, YIELD_INPUT_FEATURES};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CapabilityInfo {
    pub supported_crops: Vec<String>,
    pub input_features: Vec<String>,
}

impl CapabilityInfo {
    fn new(features: &[&str]) -> Self {
        Self {
            supported_crops: Crop::names().into_iter().map(String::from).collect(),
            input_features: features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Static description of what the rule-based predictors accept.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelInfo {
    pub crop_recommendation: CapabilityInfo,
    pub yield_prediction: CapabilityInfo,
}

impl ModelInfo {
    pub fn current() -> Self {
        Self {
            crop_recommendation: CapabilityInfo::new(&CROP_INPUT_FEATURES),
            yield_prediction: CapabilityInfo::new(&YIELD_INPUT_FEATURES),
        }
    }
}
