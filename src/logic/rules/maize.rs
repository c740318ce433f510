use super::{within, CropRule};
use crate::models::{Crop, CropRecommendationRequest};

/// Conditions:
/// - Soil pH 5.8-8.0
/// - Temperature >= 21°C
/// - Rainfall >= 500mm
pub struct MaizeRule;

impl CropRule for MaizeRule {
    fn id(&self) -> &'static str {
        "maize"
    }

    fn crop(&self) -> Crop {
        Crop::Maize
    }

    fn matches(&self, c: &CropRecommendationRequest) -> bool {
        within(c.soil_ph, 5.8, 8.0) && c.temperature >= 21.0 && c.rainfall >= 500.0
    }
}
