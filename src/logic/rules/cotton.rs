use super::{within, CropRule};
use crate::models::{Crop, CropRecommendationRequest};

/// Broadest of the rules, so it is evaluated last.
///
/// Conditions:
/// - Soil pH 5.8-8.0
/// - Temperature >= 18°C
/// - Rainfall >= 400mm
pub struct CottonRule;

impl CropRule for CottonRule {
    fn id(&self) -> &'static str {
        "cotton"
    }

    fn crop(&self) -> Crop {
        Crop::Cotton
    }

    fn matches(&self, c: &CropRecommendationRequest) -> bool {
        within(c.soil_ph, 5.8, 8.0) && c.temperature >= 18.0 && c.rainfall >= 400.0
    }
}
