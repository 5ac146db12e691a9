use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use codeclub_api_types::ErrorResponse;
use codeclub_evaluation::EvaluationError;
use tracing::error;

/// Handler-level error. Maps the pipeline's error taxonomy onto HTTP
/// status codes and a JSON error envelope.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Configuration(String),
    Upstream(String),
    Internal(anyhow::Error),
}

impl From<EvaluationError> for ApiError {
    fn from(err: EvaluationError) -> Self {
        match err {
            EvaluationError::Configuration(message) => ApiError::Configuration(message),
            EvaluationError::ProblemFetch(source) => ApiError::Upstream(source.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, "bad_request", message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "not_found", message),
            ApiError::Configuration(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "configuration_error",
                message,
            ),
            ApiError::Upstream(message) => (StatusCode::BAD_GATEWAY, "upstream_error", message),
            ApiError::Internal(err) => {
                error!(error = %err, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                code: code.to_string(),
                message,
            }),
        )
            .into_response()
    }
}
