use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::constants::{ARTIFACT_SERVICE_NAME, RULES_SERVICE_NAME, SERVICE_VERSION};
use crate::models::{HealthResponse, ServiceInfo};
use crate::server::ArtifactState;

fn service_info(name: &str) -> ServiceInfo {
    ServiceInfo {
        message: name.to_string(),
        version: SERVICE_VERSION.to_string(),
    }
}

#[tracing::instrument(name = "GET /")]
pub async fn rules_root() -> Json<ServiceInfo> {
    Json(service_info(RULES_SERVICE_NAME))
}

#[tracing::instrument(name = "GET /")]
pub async fn artifact_root() -> Json<ServiceInfo> {
    Json(service_info(ARTIFACT_SERVICE_NAME))
}

#[tracing::instrument(name = "GET /health")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Stays healthy when the model failed to load; `model_loaded` says so.
#[tracing::instrument(name = "GET /health", skip(state))]
pub async fn artifact_health(State(state): State<Arc<ArtifactState>>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy().with_model(state.model.loaded_at()))
}
