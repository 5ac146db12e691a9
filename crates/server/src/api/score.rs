//! Aggregate score API routes.

use std::sync::Arc;

use axum::extract::Path;
use axum::{Json, Router, routing::get, routing::post};
use codeclub_api_types::{RecalculateScoreRequest, RecalculateScoreResponse, TotalScoreResponse};
use codeclub_core::domain::UserId;

use super::error::ApiError;
use super::state::AppState;

pub fn create_score_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/score/recalculate", post(recalculate_score))
        .route("/api/score/{user_id}", get(total_score))
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid user id: '{raw}'")))
}

/// The durable total used for leaderboard ranking.
async fn total_score(
    state: axum::extract::State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<TotalScoreResponse>, ApiError> {
    let user_id = parse_user_id(&user_id)?;
    let total_points = state
        .recorder
        .total_points(user_id)
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(TotalScoreResponse {
        user_id: user_id.to_string(),
        total_points,
    }))
}

/// Rebuilds the aggregate from submission history, repairing any drift
/// left behind by a failed credit.
async fn recalculate_score(
    state: axum::extract::State<Arc<AppState>>,
    Json(request): Json<RecalculateScoreRequest>,
) -> Result<Json<RecalculateScoreResponse>, ApiError> {
    let user_id = parse_user_id(&request.user_id)?;
    let total_points = state
        .recorder
        .recalculate_total(user_id)
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(RecalculateScoreResponse {
        user_id: user_id.to_string(),
        total_points,
        message: "Score recalculated successfully.".to_string(),
    }))
}
