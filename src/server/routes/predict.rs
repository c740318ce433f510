use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::constants::ALTERNATIVE_CROPS;
use crate::logic::validation::{validate_crop_request, validate_yield_request};
use crate::logic::SyntheticConfidence;
use crate::models::{
    CropRecommendationRequest, CropRecommendationResponse, YieldPredictionRequest,
    YieldPredictionResponse,
};
use crate::server::{ApiError, RulesState};

#[tracing::instrument(name = "POST /predict/crop", skip(state, payload))]
pub async fn predict_crop(
    State(state): State<Arc<RulesState>>,
    payload: Result<Json<CropRecommendationRequest>, JsonRejection>,
) -> Result<Json<CropRecommendationResponse>, ApiError> {
    let Json(request) = payload?;
    validate_crop_request(&request).map_err(|e| state.errors.respond(e))?;

    let outcome = state.cascade.recommend(&request);
    tracing::debug!(
        rule = outcome.rule_id,
        crop = %outcome.crop,
        "Crop rule matched"
    );

    let confidence = SyntheticConfidence::CROP.draw(&mut rand::rng());

    Ok(Json(CropRecommendationResponse {
        recommended_crop: outcome.crop.to_string(),
        confidence,
        alternatives: ALTERNATIVE_CROPS.iter().map(|c| c.to_string()).collect(),
    }))
}

#[tracing::instrument(name = "POST /predict/yield", skip(state, payload))]
pub async fn predict_yield(
    State(state): State<Arc<RulesState>>,
    payload: Result<Json<YieldPredictionRequest>, JsonRejection>,
) -> Result<Json<YieldPredictionResponse>, ApiError> {
    let Json(request) = payload?;
    let crop = validate_yield_request(&request).map_err(|e| state.errors.respond(e))?;

    let estimate = state
        .yield_estimator
        .estimate(crop, request.area, request.input_cost, &mut rand::rng())
        .map_err(|e| state.errors.respond(e))?;

    Ok(Json(estimate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::server::routes::test_support::{get, post_json};
    use crate::server::{rules_router, ErrorPolicy};
    use axum::http::StatusCode;
    use axum::Router;
    use serde_json::json;

    fn router() -> Router {
        let state = Arc::new(RulesState::new(ErrorPolicy {
            expose_details: true,
        }));
        rules_router(state, &ServerConfig::default()).unwrap()
    }

    fn crop_body(soil_ph: f64, temperature: f64, rainfall: f64) -> String {
        json!({ "soil_ph": soil_ph, "temperature": temperature, "rainfall": rainfall }).to_string()
    }

    #[tokio::test]
    async fn root_and_health() {
        let (status, body) = get(router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "message": "Farmer Assistant ML API", "version": "1.0.0" })
        );

        let (status, body) = get(router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn recommends_rice() {
        let (status, body) =
            post_json(router(), "/predict/crop", &crop_body(6.5, 22.0, 1200.0)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommended_crop"], "Rice");
        assert_eq!(body["alternatives"], json!(["Maize", "Barley"]));
        let confidence = body["confidence"].as_f64().unwrap();
        assert!((0.75..=0.95).contains(&confidence));
    }

    #[tokio::test]
    async fn recommends_wheat_for_moderate_conditions() {
        let (status, body) =
            post_json(router(), "/predict/crop", &crop_body(6.5, 20.0, 500.0)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommended_crop"], "Wheat");
    }

    #[tokio::test]
    async fn out_of_range_inputs_are_rejected() {
        for (ph, temp, rain) in [
            (-0.5, 22.0, 1200.0),
            (14.5, 22.0, 1200.0),
            (6.5, -60.0, 1200.0),
            (6.5, 61.0, 1200.0),
            (6.5, 22.0, -1.0),
            (6.5, 22.0, 5001.0),
        ] {
            let (status, body) =
                post_json(router(), "/predict/crop", &crop_body(ph, temp, rain)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{} {} {}", ph, temp, rain);
            assert!(body["detail"].is_string());
        }
    }

    #[tokio::test]
    async fn missing_field_is_unprocessable() {
        let (status, body) =
            post_json(router(), "/predict/crop", r#"{"soil_ph": 6.5, "temperature": 22}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("rainfall"));
    }

    #[tokio::test]
    async fn yield_for_cotton_uses_rice_base_rate() {
        let body = json!({ "crop_type": "Cotton", "area": 2.0, "input_cost": 1000.0 });
        let (status, body) = post_json(router(), "/predict/yield", &body.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let predicted = body["predicted_yield"].as_f64().unwrap();
        let profit = body["expected_profit"].as_f64().unwrap();
        let confidence = body["confidence"].as_f64().unwrap();
        assert!((6400.0..=9600.0).contains(&predicted), "{}", predicted);
        assert!((profit - (predicted * 80.0 - 1000.0)).abs() < 1.0);
        assert!((0.7..=0.9).contains(&confidence));
    }

    #[tokio::test]
    async fn overflowing_yield_is_a_server_error() {
        for area in [1e303, 1e306] {
            let body = json!({ "crop_type": "Cotton", "area": area, "input_cost": 0 });
            let (status, body) = post_json(router(), "/predict/yield", &body.to_string()).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", area);
            assert!(body["detail"].as_str().unwrap().contains("out of range"));
            assert!(body.get("predicted_yield").is_none());
        }
    }

    #[tokio::test]
    async fn unknown_crop_lists_supported_crops() {
        let body = json!({ "crop_type": "Unknown", "area": 1.0, "input_cost": 100.0 });
        let (status, body) = post_json(router(), "/predict/yield", &body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let detail = body["detail"].as_str().unwrap();
        for crop in [
            "Rice", "Wheat", "Maize", "Cotton", "Sugarcane", "Potato", "Tomato", "Onion",
        ] {
            assert!(detail.contains(crop), "{} missing from {}", crop, detail);
        }
    }

    #[tokio::test]
    async fn bad_area_and_cost_are_rejected() {
        let zero_area = json!({ "crop_type": "Rice", "area": 0.0, "input_cost": 100.0 });
        let (status, body) = post_json(router(), "/predict/yield", &zero_area.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Area must be greater than 0");

        let negative_cost = json!({ "crop_type": "Rice", "area": 1.0, "input_cost": -1.0 });
        let (status, body) =
            post_json(router(), "/predict/yield", &negative_cost.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Input cost cannot be negative");
    }

    #[tokio::test]
    async fn model_info_is_static() {
        let (status, body) = get(router(), "/models/info").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["crop_recommendation"]["input_features"],
            json!(["soil_ph", "temperature", "rainfall"])
        );
        assert_eq!(
            body["yield_prediction"]["supported_crops"]
                .as_array()
                .unwrap()
                .len(),
            8
        );
    }

    #[tokio::test]
    async fn recommend_is_not_served_by_rules_variant() {
        let (status, _) = post_json(router(), "/recommend", "{}").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
