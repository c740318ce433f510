//! HTTP surface for both service variants.

pub mod error;
mod routes;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Config, ServerConfig};
use crate::error::{CropcastError, Result};
use crate::logic::{CropRuleCascade, YieldEstimator};
use crate::predictor::ModelState;
pub use error::{ApiError, ErrorPolicy};

/// Shared by every request of the rule-based variant. Read-only.
pub struct RulesState {
    pub cascade: CropRuleCascade,
    pub yield_estimator: YieldEstimator,
    pub errors: ErrorPolicy,
}

impl RulesState {
    pub fn new(errors: ErrorPolicy) -> Self {
        Self {
            cascade: CropRuleCascade::new(),
            yield_estimator: YieldEstimator::new(),
            errors,
        }
    }
}

/// Shared by every request of the artifact variant. The model is loaded
/// before this is built and never replaced.
pub struct ArtifactState {
    pub model: ModelState,
    pub errors: ErrorPolicy,
}

impl ArtifactState {
    pub fn new(model: ModelState, errors: ErrorPolicy) -> Self {
        Self { model, errors }
    }
}

pub fn rules_router(state: Arc<RulesState>, server: &ServerConfig) -> Result<Router> {
    apply_layers(routes::rules_routes().with_state(state), server)
}

pub fn artifact_router(state: Arc<ArtifactState>, server: &ServerConfig) -> Result<Router> {
    apply_layers(routes::artifact_routes().with_state(state), server)
}

fn apply_layers(router: Router, server: &ServerConfig) -> Result<Router> {
    Ok(router
        .layer(cors_layer(&server.cors_allowed_origins)?)
        .layer(RequestBodyLimitLayer::new(server.body_limit_bytes))
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    if allowed_origins.is_empty() {
        tracing::warn!("CORS allows every origin; set server.cors_allowed_origins for production");
        return Ok(CorsLayer::very_permissive());
    }

    let origins = allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o)
                .map_err(|_| CropcastError::Config(format!("invalid CORS origin '{}'", o)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

pub async fn serve(router: Router, config: &Config) -> Result<()> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
