pub mod problem_solve;
pub mod submission;
pub mod user_score;
