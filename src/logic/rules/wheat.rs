use super::{within, CropRule};
use crate::models::{Crop, CropRecommendationRequest};

/// Wheat prefers mild temperatures and moderate rainfall.
///
/// Conditions:
/// - Soil pH 6.0-7.0
/// - Temperature 15-25°C
/// - Rainfall 300-1000mm
pub struct WheatRule;

impl CropRule for WheatRule {
    fn id(&self) -> &'static str {
        "wheat"
    }

    fn crop(&self) -> Crop {
        Crop::Wheat
    }

    fn matches(&self, c: &CropRecommendationRequest) -> bool {
        within(c.soil_ph, 6.0, 7.0)
            && within(c.temperature, 15.0, 25.0)
            && within(c.rainfall, 300.0, 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_band_edges() {
        let c = CropRecommendationRequest {
            soil_ph: 7.0,
            temperature: 25.0,
            rainfall: 300.0,
        };
        assert!(WheatRule.matches(&c));
    }

    #[test]
    fn rejects_slightly_alkaline_soil() {
        let c = CropRecommendationRequest {
            soil_ph: 7.1,
            temperature: 20.0,
            rainfall: 500.0,
        };
        assert!(!WheatRule.matches(&c));
    }
}
