use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropcastError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Client-caused, field-identified input rejection.
    #[error("{0}")]
    Validation(String),

    #[error("Model not loaded. Please check the model file.")]
    ModelUnavailable,

    #[error("Invalid model artifact: {0}")]
    Artifact(String),

    #[error("{0}")]
    Prediction(String),
}

pub type Result<T> = std::result::Result<T, CropcastError>;
