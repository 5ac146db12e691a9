use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use codeclub_core::domain::{
    BasePoints, Difficulty, Language, Problem, ProblemSlug, SubmissionStatus, TestCase, UserId,
};
use codeclub_evaluation::{EvaluationError, ExecutionError, JudgeClient, JudgeRun, ProblemStore};
use codeclub_migration::{Migrator, MigratorTrait};
use codeclub_server::api::AppState;
use codeclub_server::recorder::SubmissionRecorder;
use codeclub_server::repository::{
    NewSubmission, SeaOrmScoreRepository, SeaOrmSubmissionRepository,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("in-memory sqlite should connect");
    Migrator::up(&db, None)
        .await
        .expect("migrations should apply");
    db
}

pub fn test_recorder(db: &DatabaseConnection) -> SubmissionRecorder {
    SubmissionRecorder::new(
        Arc::new(SeaOrmSubmissionRepository::new(db.clone())),
        Arc::new(SeaOrmScoreRepository::new(db.clone())),
    )
}

pub fn submission_repository(db: &DatabaseConnection) -> SeaOrmSubmissionRepository {
    SeaOrmSubmissionRepository::new(db.clone())
}

pub fn new_submission(
    user_id: UserId,
    slug: &str,
    status: SubmissionStatus,
    points: u32,
) -> NewSubmission {
    NewSubmission {
        user_id,
        problem_slug: ProblemSlug::new(slug).expect("test slug should be valid"),
        language: Language::Python,
        status,
        source_code: "print(3)".to_string(),
        runtime_ms: Some(42),
        points,
    }
}

/// Judge double that always answers with the same stdout and counts how
/// often it was called.
pub struct FixedOutputJudge {
    stdout: String,
    calls: AtomicUsize,
}

impl FixedOutputJudge {
    pub fn new(stdout: &str) -> Self {
        Self {
            stdout: stdout.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JudgeClient for FixedOutputJudge {
    async fn execute(
        &self,
        _language: Language,
        _source: &str,
        _stdin: &str,
    ) -> Result<JudgeRun, ExecutionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(JudgeRun {
            stdout: self.stdout.clone(),
            ..JudgeRun::default()
        })
    }
}

/// Problem store double serving a fixed set of problems by slug.
pub struct StaticProblemStore {
    problems: Vec<Problem>,
}

impl StaticProblemStore {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self { problems }
    }
}

#[async_trait]
impl ProblemStore for StaticProblemStore {
    async fn find_by_slug(&self, slug: &ProblemSlug) -> Result<Option<Problem>, EvaluationError> {
        Ok(self
            .problems
            .iter()
            .find(|problem| &problem.slug == slug)
            .cloned())
    }
}

pub fn two_sum_problem() -> Problem {
    Problem {
        slug: ProblemSlug::new("two-sum").expect("slug should be valid"),
        difficulty: Difficulty::Easy,
        base_points: BasePoints::new(100).expect("base points should be valid"),
        optimal_loc: Some(20),
        test_cases: vec![TestCase {
            input: "1 2".to_string(),
            output: "3".to_string(),
        }],
    }
}

pub fn caseless_problem() -> Problem {
    Problem {
        slug: ProblemSlug::new("unconfigured").expect("slug should be valid"),
        difficulty: Difficulty::Medium,
        base_points: BasePoints::default(),
        optimal_loc: None,
        test_cases: Vec::new(),
    }
}

pub async fn test_state(
    judge: Arc<FixedOutputJudge>,
    problems: Vec<Problem>,
) -> (Arc<AppState>, DatabaseConnection) {
    let db = test_db().await;
    let recorder = test_recorder(&db);

    let state = Arc::new(AppState::with_collaborators(
        Arc::new(StaticProblemStore::new(problems)),
        judge,
        recorder,
    ));
    (state, db)
}
