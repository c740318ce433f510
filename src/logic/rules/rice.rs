use super::{within, CropRule};
use crate::models::{Crop, CropRecommendationRequest};

/// Rice wants near-neutral soil, warmth and a lot of water.
///
/// Conditions:
/// - Soil pH 6.0-7.5
/// - Temperature >= 20°C
/// - Rainfall >= 1000mm
pub struct RiceRule;

impl CropRule for RiceRule {
    fn id(&self) -> &'static str {
        "rice"
    }

    fn crop(&self) -> Crop {
        Crop::Rice
    }

    fn matches(&self, c: &CropRecommendationRequest) -> bool {
        within(c.soil_ph, 6.0, 7.5) && c.temperature >= 20.0 && c.rainfall >= 1000.0
    }
}
