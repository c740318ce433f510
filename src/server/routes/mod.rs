mod model_info;
mod predict;
mod recommend;
mod service;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::{ArtifactState, RulesState};
use crate::constants::routes;

pub(super) fn rules_routes() -> Router<Arc<RulesState>> {
    Router::new()
        .route(routes::ROOT, get(service::rules_root))
        .route(routes::HEALTH, get(service::health))
        .route(routes::PREDICT_CROP, post(predict::predict_crop))
        .route(routes::PREDICT_YIELD, post(predict::predict_yield))
        .route(routes::MODELS_INFO, get(model_info::model_info))
}

pub(super) fn artifact_routes() -> Router<Arc<ArtifactState>> {
    Router::new()
        .route(routes::ROOT, get(service::artifact_root))
        .route(routes::HEALTH, get(service::artifact_health))
        .route(routes::RECOMMEND, post(recommend::recommend))
}
