//! Request validation for the rule-based predictors.
//!
//! Checks run in a fixed order and the first failure is reported.

use crate::constants::{RAINFALL_RANGE, SOIL_PH_RANGE, TEMPERATURE_RANGE};
use crate::error::{CropcastError, Result};
use crate::models::{Crop, CropRecommendationRequest, YieldPredictionRequest};

pub fn validate_crop_request(req: &CropRecommendationRequest) -> Result<()> {
    if !SOIL_PH_RANGE.contains(req.soil_ph) {
        return Err(CropcastError::Validation(format!(
            "Soil pH must be between {} and {}",
            SOIL_PH_RANGE.min, SOIL_PH_RANGE.max
        )));
    }
    if !TEMPERATURE_RANGE.contains(req.temperature) {
        return Err(CropcastError::Validation(format!(
            "Temperature must be between {}°C and {}°C",
            TEMPERATURE_RANGE.min, TEMPERATURE_RANGE.max
        )));
    }
    if !RAINFALL_RANGE.contains(req.rainfall) {
        return Err(CropcastError::Validation(format!(
            "Rainfall must be between {} and {}mm",
            RAINFALL_RANGE.min, RAINFALL_RANGE.max
        )));
    }
    Ok(())
}

/// Returns the parsed crop on success.
pub fn validate_yield_request(req: &YieldPredictionRequest) -> Result<Crop> {
    if req.area.is_nan() || req.area <= 0.0 {
        return Err(CropcastError::Validation(
            "Area must be greater than 0".into(),
        ));
    }
    if req.input_cost.is_nan() || req.input_cost < 0.0 {
        return Err(CropcastError::Validation(
            "Input cost cannot be negative".into(),
        ));
    }
    Crop::from_name(&req.crop_type).ok_or_else(|| {
        CropcastError::Validation(format!(
            "Unsupported crop type. Supported: {:?}",
            Crop::names()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop_req(soil_ph: f64, temperature: f64, rainfall: f64) -> CropRecommendationRequest {
        CropRecommendationRequest {
            soil_ph,
            temperature,
            rainfall,
        }
    }

    fn yield_req(crop_type: &str, area: f64, input_cost: f64) -> YieldPredictionRequest {
        YieldPredictionRequest {
            crop_type: crop_type.to_string(),
            area,
            input_cost,
        }
    }

    fn message(result: Result<impl std::fmt::Debug>) -> String {
        match result {
            Err(CropcastError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn crop_request_in_range() {
        assert!(validate_crop_request(&crop_req(6.5, 22.0, 1200.0)).is_ok());
        assert!(validate_crop_request(&crop_req(0.0, -50.0, 0.0)).is_ok());
        assert!(validate_crop_request(&crop_req(14.0, 60.0, 5000.0)).is_ok());
    }

    #[test]
    fn soil_ph_out_of_range() {
        let msg = message(validate_crop_request(&crop_req(14.5, 22.0, 1200.0)));
        assert_eq!(msg, "Soil pH must be between 0 and 14");
        assert!(validate_crop_request(&crop_req(-0.1, 22.0, 1200.0)).is_err());
    }

    #[test]
    fn temperature_out_of_range() {
        let msg = message(validate_crop_request(&crop_req(6.5, 61.0, 1200.0)));
        assert_eq!(msg, "Temperature must be between -50°C and 60°C");
        assert!(validate_crop_request(&crop_req(6.5, -51.0, 1200.0)).is_err());
    }

    #[test]
    fn rainfall_out_of_range() {
        let msg = message(validate_crop_request(&crop_req(6.5, 22.0, 5000.1)));
        assert_eq!(msg, "Rainfall must be between 0 and 5000mm");
        assert!(validate_crop_request(&crop_req(6.5, 22.0, -1.0)).is_err());
    }

    #[test]
    fn first_failing_field_is_reported() {
        let msg = message(validate_crop_request(&crop_req(20.0, 100.0, -5.0)));
        assert!(msg.starts_with("Soil pH"));
    }

    #[test]
    fn nan_is_rejected() {
        assert!(validate_crop_request(&crop_req(f64::NAN, 22.0, 1200.0)).is_err());
        assert!(validate_yield_request(&yield_req("Rice", f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn yield_request_valid() {
        assert_eq!(
            validate_yield_request(&yield_req("Cotton", 2.0, 1000.0)).unwrap(),
            Crop::Cotton
        );
        assert!(validate_yield_request(&yield_req("Rice", 0.01, 0.0)).is_ok());
    }

    #[test]
    fn area_must_be_positive() {
        let msg = message(validate_yield_request(&yield_req("Rice", 0.0, 100.0)));
        assert_eq!(msg, "Area must be greater than 0");
    }

    #[test]
    fn input_cost_must_not_be_negative() {
        let msg = message(validate_yield_request(&yield_req("Rice", 1.0, -0.01)));
        assert_eq!(msg, "Input cost cannot be negative");
    }

    #[test]
    fn unknown_crop_lists_supported() {
        let msg = message(validate_yield_request(&yield_req("Unknown", 1.0, 10.0)));
        assert_eq!(
            msg,
            "Unsupported crop type. Supported: [\"Rice\", \"Wheat\", \"Maize\", \"Cotton\", \
             \"Sugarcane\", \"Potato\", \"Tomato\", \"Onion\"]"
        );
    }
}
