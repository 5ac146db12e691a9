//! Efficiency grading for the "submit" flow.
//!
//! Runs in-process as a pure function of its request; identical requests
//! always produce identical reports, which keeps final scores auditable.

use codeclub_core::domain::Difficulty;
use serde::Serialize;

use crate::loc::effective_loc;

/// Effective-LOC baseline used when a problem carries no curated value.
pub const DEFAULT_OPTIMAL_LOC: u32 = 20;

const SPEED_WEIGHT: f64 = 0.4;
const COMPLEXITY_WEIGHT: f64 = 0.4;
const LOC_WEIGHT: f64 = 0.2;

/// Big-O classes ordered from best to worst; the derived `Ord` follows
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Complexity {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    Cubic,
    Exponential,
    Factorial,
}

#[derive(Debug, Clone)]
pub struct GradingRequest<'a> {
    pub difficulty: Difficulty,
    pub execution_time_ms: u32,
    pub code: &'a str,
    pub optimal_loc: u32,
    pub expected_complexity: Complexity,
    /// Complexity class of the submitted code. Static analysis of this is
    /// out of reach today, so callers fall back to a pessimistic default.
    pub user_complexity: Complexity,
}

impl<'a> GradingRequest<'a> {
    pub fn new(
        difficulty: Difficulty,
        execution_time_ms: u32,
        code: &'a str,
        optimal_loc: u32,
    ) -> Self {
        Self {
            difficulty,
            execution_time_ms,
            code,
            optimal_loc,
            expected_complexity: Complexity::Linear,
            user_complexity: Complexity::Quadratic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryScore {
    pub score: f64,
    pub max: f64,
}

impl CategoryScore {
    fn rounded(score: f64, max: f64) -> Self {
        Self {
            score: round2(score),
            max: round2(max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradingDetails {
    pub execution_speed: CategoryScore,
    pub time_complexity: CategoryScore,
    pub lines_of_code: CategoryScore,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradingReport {
    pub total_score: f64,
    pub max_marks: f64,
    pub details: GradingDetails,
}

impl GradingReport {
    /// Whole points awarded for the submission.
    pub fn awarded_points(&self) -> u32 {
        self.total_score.round().max(0.0) as u32
    }
}

/// Total marks available for a problem of the given difficulty.
pub fn max_marks(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 10.0,
        Difficulty::Medium => 20.0,
        Difficulty::Hard => 30.0,
    }
}

/// Stepped percentage of the category maximum: 0ms is full marks, each
/// additional millisecond costs 20 points of percentage down to half.
fn speed_score(execution_time_ms: u32, category_max: f64) -> f64 {
    let fraction = match execution_time_ms {
        0 => 1.0,
        1 => 0.8,
        2 => 0.6,
        _ => 0.5,
    };
    category_max * fraction
}

/// At or better than expected is full marks; each rank of regression
/// costs a quarter of the category, down to a quarter.
fn complexity_score(actual: Complexity, expected: Complexity, category_max: f64) -> f64 {
    if actual <= expected {
        return category_max;
    }

    let rank_difference = actual as u8 - expected as u8;
    let fraction = match rank_difference {
        1 => 0.75,
        2 => 0.5,
        _ => 0.25,
    };
    category_max * fraction
}

/// Penalized by how far the submission's effective LOC exceeds the
/// optimal baseline.
fn loc_score(actual_loc: u32, optimal_loc: u32, category_max: f64) -> f64 {
    if actual_loc <= optimal_loc {
        return category_max;
    }

    let ratio = f64::from(actual_loc) / f64::from(optimal_loc.max(1));
    let fraction = if ratio <= 1.2 {
        0.8
    } else if ratio <= 1.5 {
        0.6
    } else {
        0.4
    };
    category_max * fraction
}

/// Grades one passed submission. Deterministic: no clock, no randomness,
/// no I/O.
pub fn grade(request: &GradingRequest<'_>) -> GradingReport {
    let total_marks = max_marks(request.difficulty);
    let max_speed = total_marks * SPEED_WEIGHT;
    let max_complexity = total_marks * COMPLEXITY_WEIGHT;
    let max_loc = total_marks * LOC_WEIGHT;

    let speed = speed_score(request.execution_time_ms, max_speed);
    let complexity = complexity_score(
        request.user_complexity,
        request.expected_complexity,
        max_complexity,
    );
    let loc = loc_score(effective_loc(request.code), request.optimal_loc, max_loc);

    GradingReport {
        total_score: round2(speed + complexity + loc),
        max_marks: total_marks,
        details: GradingDetails {
            execution_speed: CategoryScore::rounded(speed, max_speed),
            time_complexity: CategoryScore::rounded(complexity, max_complexity),
            lines_of_code: CategoryScore::rounded(loc, max_loc),
        },
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
