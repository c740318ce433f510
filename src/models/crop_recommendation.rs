use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CropRecommendationRequest {
    pub soil_ph: f64,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Millimetres per year.
    pub rainfall: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CropRecommendationResponse {
    pub recommended_crop: String,
    /// Synthetic, see [`crate::logic::SyntheticConfidence`].
    pub confidence: f64,
    pub alternatives: Vec<String>,
}
