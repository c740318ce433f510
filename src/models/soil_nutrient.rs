use serde::{Deserialize, Serialize};

/// Input for the artifact-backed recommender. No ranges are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SoilNutrientRequest {
    #[serde(rename = "N")]
    pub nitrogen: i64,
    #[serde(rename = "P")]
    pub phosphorus: i64,
    #[serde(rename = "K")]
    pub potassium: i64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

impl SoilNutrientRequest {
    /// Values in [`crate::constants::SOIL_NUTRIENT_COLUMNS`] order.
    pub fn to_row(&self) -> [f64; 7] {
        [
            self.nitrogen as f64,
            self.phosphorus as f64,
            self.potassium as f64,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SoilNutrientResponse {
    pub recommended_crop: String,
}
