use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::CropcastError;
use crate::models::ErrorBody;

const GENERIC_INTERNAL_MESSAGE: &str = "Internal server error";

/// HTTP-facing error. Renders as `{"detail": "..."}`.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Bad request: {}", msg);
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::error!("Internal error: {}", msg);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let detail = rejection.body_text();
        tracing::warn!("Rejected request body: {}", detail);
        Self::new(rejection.status(), detail)
    }
}

/// Decides how much of an internal failure reaches the client.
#[derive(Debug, Clone, Copy)]
pub struct ErrorPolicy {
    /// Raw error text in 500 bodies leaks internals; only the default to stay
    /// compatible with existing clients.
    pub expose_details: bool,
}

impl ErrorPolicy {
    pub fn respond(&self, err: CropcastError) -> ApiError {
        match err {
            CropcastError::Validation(msg) => ApiError::bad_request(msg),
            CropcastError::ModelUnavailable => ApiError::internal(err.to_string()),
            other => {
                let api_error = ApiError::internal(other.to_string());
                if self.expose_details {
                    api_error
                } else {
                    ApiError::new(api_error.status, GENERIC_INTERNAL_MESSAGE)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPOSE: ErrorPolicy = ErrorPolicy {
        expose_details: true,
    };
    const HIDE: ErrorPolicy = ErrorPolicy {
        expose_details: false,
    };

    #[test]
    fn validation_is_bad_request() {
        let err = EXPOSE.respond(CropcastError::Validation("Area must be greater than 0".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail(), "Area must be greater than 0");
    }

    #[test]
    fn model_unavailable_keeps_fixed_message_even_when_hiding() {
        let err = HIDE.respond(CropcastError::ModelUnavailable);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "Model not loaded. Please check the model file.");
    }

    #[test]
    fn internal_detail_follows_policy() {
        let shown = EXPOSE.respond(CropcastError::Prediction("boom".into()));
        assert_eq!(shown.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(shown.detail(), "boom");

        let hidden = HIDE.respond(CropcastError::Prediction("boom".into()));
        assert_eq!(hidden.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(hidden.detail(), GENERIC_INTERNAL_MESSAGE);
    }
}
