//! The two scoring strategies. Runtime scoring backs the interactive
//! "run" flow; efficiency grading backs the final "submit" flow, where a
//! durable, auditable score is required.

pub mod grading;
pub mod runtime;

pub use grading::{
    CategoryScore, Complexity, DEFAULT_OPTIMAL_LOC, GradingDetails, GradingReport, GradingRequest,
    grade, max_marks,
};
