use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct YieldPredictionRequest {
    /// Validated against [`crate::models::Crop`] by name.
    pub crop_type: String,
    /// Hectares.
    pub area: f64,
    pub input_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct YieldPredictionResponse {
    pub predicted_yield: f64,
    pub expected_profit: f64,
    pub confidence: f64,
}
