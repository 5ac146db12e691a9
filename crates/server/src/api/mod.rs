//! API routing for the evaluation pipeline.

pub mod code;
pub mod error;
pub mod score;
pub mod state;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use codeclub_api_types::HealthCheckResponse;
use tower_http::cors::CorsLayer;

pub use error::ApiError;
pub use state::AppState;

pub fn create_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .merge(code::create_code_router())
        .merge(score::create_score_router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::ok())
}
