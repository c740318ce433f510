//! Offline smoke test for the model artifact.

use crate::error::Result;
use crate::models::SoilNutrientRequest;
use crate::predictor::{FeatureFrame, ModelState};

/// Field readings that have produced surprising labels in the past, plus
/// variations of them.
pub fn sample_requests() -> Vec<SoilNutrientRequest> {
    let base = SoilNutrientRequest {
        nitrogen: 52,
        phosphorus: 26,
        potassium: 38,
        temperature: 26.0,
        humidity: 60.0,
        ph: 8.4,
        rainfall: 6.5,
    };

    vec![
        base,
        SoilNutrientRequest { ph: 6.5, ..base },
        SoilNutrientRequest {
            rainfall: 100.0,
            ..base
        },
        SoilNutrientRequest {
            ph: 6.5,
            rainfall: 100.0,
            ..base
        },
        SoilNutrientRequest {
            ph: 7.0,
            rainfall: 50.0,
            ..base
        },
    ]
}

/// Runs every sample through the model. Fails only when the model itself is
/// unavailable; per-row failures are reported alongside their inputs.
pub fn run_samples(model: &ModelState) -> Result<Vec<(SoilNutrientRequest, Result<String>)>> {
    let predictor = model.predictor()?;

    Ok(sample_requests()
        .into_iter()
        .map(|req| {
            let label = predictor.predict_one(&FeatureFrame::from_soil_nutrients(&req));
            (req, label)
        })
        .collect())
}
