//! Shared request/response types used by API-facing crates.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
}

impl HealthCheckResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// Body shared by both evaluation endpoints. The user id comes from the
/// external session provider; this service does not verify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub user_id: String,
    pub problem_slug: String,
    pub language: String,
    pub code: String,
}

/// Per-case verdict, shown only in the interactive "run" flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResultBody {
    pub test_case: usize,
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
    pub stderr: String,
    pub runtime_ms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteResponse {
    pub passed: bool,
    pub results: Vec<CaseResultBody>,
    pub points_awarded: u32,
    pub runtime_ms: u32,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScoreBody {
    pub score: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingBreakdown {
    pub execution_speed: CategoryScoreBody,
    pub time_complexity: CategoryScoreBody,
    pub lines_of_code: CategoryScoreBody,
}

/// Submit-flow outcome. Per-case detail is deliberately withheld here;
/// a failed final submission only learns that it did not pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    pub message: String,
    pub points_awarded: u32,
    pub max_points: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<GradingBreakdown>,
}

impl SubmitResponse {
    pub const STATUS_SUCCESS: &'static str = "Success";
    pub const STATUS_FAILED: &'static str = "Failed";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalScoreResponse {
    pub user_id: String,
    pub total_points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecalculateScoreRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecalculateScoreResponse {
    pub user_id: String,
    pub total_points: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_ok_payload() {
        let response = HealthCheckResponse::ok();
        assert_eq!(response.status, "ok");
    }

    #[test]
    fn error_response_round_trip_json() {
        let response = ErrorResponse {
            code: "not_found".to_string(),
            message: "resource missing".to_string(),
        };

        let json = serde_json::to_string(&response).expect("serialize error response");
        let decoded: ErrorResponse =
            serde_json::from_str(&json).expect("deserialize error response");

        assert_eq!(decoded, response);
    }

    #[test]
    fn evaluation_request_deserializes_from_client_payload() {
        let request: EvaluationRequest = serde_json::from_str(
            r#"{
                "user_id": "8e7f9a4e-7f7f-4a77-9f2a-0f2f6f3a1b2c",
                "problem_slug": "two-sum",
                "language": "py",
                "code": "print(3)"
            }"#,
        )
        .expect("deserialize evaluation request");

        assert_eq!(request.problem_slug, "two-sum");
        assert_eq!(request.language, "py");
    }

    #[test]
    fn failed_submit_response_omits_breakdown() {
        let response = SubmitResponse {
            status: SubmitResponse::STATUS_FAILED.to_string(),
            message: "Your solution did not pass all test cases.".to_string(),
            points_awarded: 0,
            max_points: 20.0,
            breakdown: None,
        };

        let json = serde_json::to_string(&response).expect("serialize submit response");
        assert!(!json.contains("breakdown"));
    }
}
