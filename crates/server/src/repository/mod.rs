pub mod score_repository;
pub mod submission_repository;

pub use score_repository::{ScoreRepository, SeaOrmScoreRepository};
pub use submission_repository::{
    NewSubmission, SeaOrmSubmissionRepository, SubmissionRecord, SubmissionRepository,
};
