use axum::Json;

use crate::models::ModelInfo;

#[tracing::instrument(name = "GET /models/info")]
pub async fn model_info() -> Json<ModelInfo> {
    Json(ModelInfo::current())
}
