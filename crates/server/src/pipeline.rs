//! The two evaluation flows, from request to recorded submission.
//!
//! "Run" is the interactive flow: runtime-strategy scoring and full
//! per-case detail in the response. "Submit" is the final flow:
//! efficiency grading, durable score, and no per-case detail on failure.

use codeclub_api_types::{
    CaseResultBody, CategoryScoreBody, EvaluationRequest, ExecuteResponse, GradingBreakdown,
    SubmitResponse,
};
use codeclub_core::domain::{Language, Problem, ProblemSlug, SubmissionStatus, UserId};
use codeclub_evaluation::harness::{CaseResult, HarnessReport};
use codeclub_evaluation::run_all_cases;
use codeclub_evaluation::score::{
    DEFAULT_OPTIMAL_LOC, GradingReport, GradingRequest, grade, max_marks, runtime,
};
use tracing::info;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::repository::NewSubmission;

struct ParsedRequest {
    user_id: UserId,
    slug: ProblemSlug,
    language: Language,
}

fn parse_request(request: &EvaluationRequest) -> Result<ParsedRequest, ApiError> {
    let user_id: UserId = request
        .user_id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid user id: '{}'", request.user_id)))?;
    let slug: ProblemSlug = request
        .problem_slug
        .parse()
        .map_err(|err: codeclub_core::domain::DomainError| ApiError::BadRequest(err.to_string()))?;
    let language: Language = request
        .language
        .parse()
        .map_err(|err: codeclub_core::domain::DomainError| ApiError::BadRequest(err.to_string()))?;

    Ok(ParsedRequest {
        user_id,
        slug,
        language,
    })
}

async fn fetch_problem(state: &AppState, slug: &ProblemSlug) -> Result<Problem, ApiError> {
    state
        .problems
        .find_by_slug(slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("problem not found: {slug}")))
}

fn case_body(case: &CaseResult) -> CaseResultBody {
    CaseResultBody {
        test_case: case.index,
        input: case.input.clone(),
        expected: case.expected.clone(),
        actual: case.actual.clone(),
        passed: case.passed,
        stderr: case.stderr.clone(),
        runtime_ms: case.runtime_ms,
        error: case.error.clone(),
    }
}

fn breakdown_body(report: &GradingReport) -> GradingBreakdown {
    GradingBreakdown {
        execution_speed: CategoryScoreBody {
            score: report.details.execution_speed.score,
            max: report.details.execution_speed.max,
        },
        time_complexity: CategoryScoreBody {
            score: report.details.time_complexity.score,
            max: report.details.time_complexity.max,
        },
        lines_of_code: CategoryScoreBody {
            score: report.details.lines_of_code.score,
            max: report.details.lines_of_code.max,
        },
    }
}

async fn record(
    state: &AppState,
    parsed: &ParsedRequest,
    request: &EvaluationRequest,
    report: &HarnessReport,
    points: u32,
) -> Result<(), ApiError> {
    let status = if report.all_passed {
        SubmissionStatus::Passed
    } else {
        SubmissionStatus::Failed
    };

    state
        .recorder
        .record_and_aggregate(NewSubmission {
            user_id: parsed.user_id,
            problem_slug: parsed.slug.clone(),
            language: parsed.language,
            status,
            source_code: request.code.clone(),
            runtime_ms: Some(report.avg_runtime_ms),
            points,
        })
        .await
        .map_err(ApiError::Internal)?;

    Ok(())
}

/// Interactive "run" flow: full per-case feedback, runtime-based points.
pub async fn run_flow(
    state: &AppState,
    request: &EvaluationRequest,
) -> Result<ExecuteResponse, ApiError> {
    let parsed = parse_request(request)?;
    let problem = fetch_problem(state, &parsed.slug).await?;

    let report = run_all_cases(
        state.judge.as_ref(),
        parsed.language,
        &request.code,
        &problem.test_cases,
    )
    .await?;

    let points = runtime::score(
        report.all_passed,
        report.avg_runtime_ms,
        problem.base_points.value(),
    );

    info!(
        problem = %parsed.slug,
        passed = report.all_passed,
        points,
        runtime_ms = report.avg_runtime_ms,
        "run flow evaluated"
    );

    record(state, &parsed, request, &report, points).await?;

    Ok(ExecuteResponse {
        passed: report.all_passed,
        results: report.cases.iter().map(case_body).collect(),
        points_awarded: points,
        runtime_ms: report.avg_runtime_ms,
        message: format!(
            "{}/{} test cases passed.",
            report.passed_count(),
            report.cases.len()
        ),
    })
}

/// Final "submit" flow: efficiency grading on a full pass, information
/// hiding on failure.
pub async fn submit_flow(
    state: &AppState,
    request: &EvaluationRequest,
) -> Result<SubmitResponse, ApiError> {
    let parsed = parse_request(request)?;
    let problem = fetch_problem(state, &parsed.slug).await?;

    let report = run_all_cases(
        state.judge.as_ref(),
        parsed.language,
        &request.code,
        &problem.test_cases,
    )
    .await?;

    if !report.all_passed {
        record(state, &parsed, request, &report, 0).await?;

        return Ok(SubmitResponse {
            status: SubmitResponse::STATUS_FAILED.to_string(),
            message: "Your solution did not pass all test cases.".to_string(),
            points_awarded: 0,
            max_points: max_marks(problem.difficulty),
            breakdown: None,
        });
    }

    let grading = grade(&GradingRequest::new(
        problem.difficulty,
        report.avg_runtime_ms,
        &request.code,
        problem.optimal_loc.unwrap_or(DEFAULT_OPTIMAL_LOC),
    ));
    let points = grading.awarded_points();

    info!(
        problem = %parsed.slug,
        points,
        max_points = grading.max_marks,
        "submit flow graded"
    );

    record(state, &parsed, request, &report, points).await?;

    Ok(SubmitResponse {
        status: SubmitResponse::STATUS_SUCCESS.to_string(),
        message: format!(
            "Congratulations! All {} test cases passed. You earned {points} points.",
            report.cases.len()
        ),
        points_awarded: points,
        max_points: grading.max_marks,
        breakdown: Some(breakdown_body(&grading)),
    })
}
