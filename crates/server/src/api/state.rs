//! Shared application state for the API routers.

use std::sync::Arc;

use codeclub_evaluation::{
    ContentfulProblemStore, JudgeClient, PipelineConfig, PistonClient, ProblemStore,
};
use sea_orm::DatabaseConnection;

use crate::recorder::SubmissionRecorder;
use crate::repository::{SeaOrmScoreRepository, SeaOrmSubmissionRepository};

#[derive(Clone)]
pub struct AppState {
    pub problems: Arc<dyn ProblemStore>,
    pub judge: Arc<dyn JudgeClient>,
    pub recorder: SubmissionRecorder,
}

impl AppState {
    pub fn new(config: &PipelineConfig, db: DatabaseConnection) -> Self {
        let recorder = SubmissionRecorder::new(
            Arc::new(SeaOrmSubmissionRepository::new(db.clone())),
            Arc::new(SeaOrmScoreRepository::new(db)),
        );

        Self {
            problems: Arc::new(ContentfulProblemStore::new(&config.cms)),
            judge: Arc::new(PistonClient::new(&config.judge)),
            recorder,
        }
    }

    /// Assembles a state from explicit collaborators; used by tests to
    /// swap in scripted judge and problem-store doubles.
    pub fn with_collaborators(
        problems: Arc<dyn ProblemStore>,
        judge: Arc<dyn JudgeClient>,
        recorder: SubmissionRecorder,
    ) -> Self {
        Self {
            problems,
            judge,
            recorder,
        }
    }
}
