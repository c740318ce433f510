use rand::Rng;

use super::SyntheticConfidence;
use crate::error::{CropcastError, Result};
use crate::models::{Crop, YieldPredictionResponse};

/// Multiplicative spread applied to the base yield, `[low, high)`.
const VARIATION: (f64, f64) = (0.8, 1.2);

/// Rule-based yield and profit estimate.
///
/// The base rate is always the rice rate, whatever crop was requested. Only
/// the price lookup uses the requested crop. Existing clients depend on these
/// numbers, so the behaviour is kept until someone decides otherwise.
#[derive(Debug, Clone, Copy)]
pub struct YieldEstimator {
    confidence: SyntheticConfidence,
}

impl YieldEstimator {
    pub fn new() -> Self {
        Self {
            confidence: SyntheticConfidence::YIELD,
        }
    }

    /// Fails with [`CropcastError::Prediction`] when the numbers leave the
    /// f64 range, since JSON has no representation for infinities.
    pub fn estimate<R: Rng>(
        &self,
        crop: Crop,
        area: f64,
        input_cost: f64,
        rng: &mut R,
    ) -> Result<YieldPredictionResponse> {
        let base_yield = Crop::Rice.base_yield_per_hectare();
        let predicted_yield = base_yield * area * rng.random_range(VARIATION.0..VARIATION.1);

        let expected_revenue = predicted_yield * crop.price_per_unit();
        let expected_profit = expected_revenue - input_cost;

        Ok(YieldPredictionResponse {
            predicted_yield: ensure_finite("predicted yield", round2(predicted_yield))?,
            expected_profit: ensure_finite("expected profit", round2(expected_profit))?,
            confidence: self.confidence.draw(rng),
        })
    }
}

impl Default for YieldEstimator {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_finite(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CropcastError::Prediction(format!(
            "{} is out of range for the given area",
            what
        )))
    }
}

/// Two decimal places. Exact half-ties round away from zero, not to even.
/// Values too large to scale by 100 are returned as they are.
fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}
