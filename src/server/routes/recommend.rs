use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::models::{SoilNutrientRequest, SoilNutrientResponse};
use crate::predictor::FeatureFrame;
use crate::server::{ApiError, ArtifactState};

/// Inputs go to the model as-is; no range checks in this variant.
#[tracing::instrument(name = "POST /recommend", skip(state, payload))]
pub async fn recommend(
    State(state): State<Arc<ArtifactState>>,
    payload: Result<Json<SoilNutrientRequest>, JsonRejection>,
) -> Result<Json<SoilNutrientResponse>, ApiError> {
    let Json(request) = payload?;
    let predictor = state.model.predictor().map_err(|e| state.errors.respond(e))?;

    let frame = FeatureFrame::from_soil_nutrients(&request);
    let label = predictor
        .predict_one(&frame)
        .map_err(|e| state.errors.respond(e))?;

    tracing::debug!(crop = %label, "Model prediction");
    Ok(Json(SoilNutrientResponse {
        recommended_crop: label,
    }))
}
