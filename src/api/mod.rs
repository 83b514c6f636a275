//! REST API endpoints.
//!
//! Axum-based HTTP API serving the player dataset and its
//! aggregate statistics.

pub mod routes;
pub mod state;

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::calculate::StatsError;
use crate::storage::StorageError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("Player data unavailable: {0}")]
    DataUnavailable(String),

    #[error("No players to compute statistics from")]
    EmptyDataset,

    #[error("No player has a height to compute body-mass index from")]
    NoHeightData,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::DataUnavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DATA_UNAVAILABLE")
            }
            ApiError::EmptyDataset => (StatusCode::INTERNAL_SERVER_ERROR, "EMPTY_DATASET"),
            ApiError::NoHeightData => (StatusCode::INTERNAL_SERVER_ERROR, "NO_HEIGHT_DATA"),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::DataUnavailable(err.to_string())
    }
}

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::EmptyDataset => ApiError::EmptyDataset,
            StatsError::NoHeightData => ApiError::NoHeightData,
        }
    }
}

/// Router options that do not belong in handler state.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub cors_origin: String,
    pub access_log: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            cors_origin: "*".to_string(),
            access_log: false,
        }
    }
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origin == "*" {
        return layer.allow_origin(Any);
    }
    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid CORS origin {:?}, allowing any", origin);
            layer.allow_origin(Any)
        }
    }
}

/// Build the API router with default options.
pub fn build_router(state: AppState) -> Router {
    build_router_with(state, &RouterOptions::default())
}

/// Build the API router.
pub fn build_router_with(state: AppState, options: &RouterOptions) -> Router {
    let router = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/getPlayers", get(routes::players::list_players))
        .route("/getPlayer/:id", get(routes::players::get_player))
        .route("/getStats", get(routes::stats::get_stats))
        .layer(cors_layer(&options.cors_origin))
        .with_state(state);

    if options.access_log {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}
