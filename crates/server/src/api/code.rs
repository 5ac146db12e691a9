//! Code evaluation API routes.

use std::sync::Arc;

use axum::{Json, Router, routing::post};
use codeclub_api_types::{EvaluationRequest, ExecuteResponse, SubmitResponse};

use super::error::ApiError;
use super::state::AppState;
use crate::pipeline;

pub fn create_code_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/code/execute", post(execute))
        .route("/api/code/submit", post(submit))
}

/// Interactive "run" evaluation with per-case feedback.
async fn execute(
    state: axum::extract::State<Arc<AppState>>,
    Json(request): Json<EvaluationRequest>,
) -> Result<Json<ExecuteResponse>, ApiError> {
    let response = pipeline::run_flow(&state, &request).await?;
    Ok(Json(response))
}

/// Final submission with efficiency grading.
async fn submit(
    state: axum::extract::State<Arc<AppState>>,
    Json(request): Json<EvaluationRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let response = pipeline::submit_flow(&state, &request).await?;
    Ok(Json(response))
}
