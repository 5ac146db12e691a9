//! Durable recording of evaluation attempts and the per-user score
//! aggregate derived from them.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use codeclub_core::domain::{SubmissionId, UserId};
use tracing::{info, warn};

use crate::repository::{NewSubmission, ScoreRepository, SubmissionRepository};

#[derive(Debug, Clone, Copy)]
pub struct RecordOutcome {
    pub submission_id: SubmissionId,
    /// Whether this attempt was the user's first solve of the problem
    /// and therefore credited the aggregate.
    pub first_solve: bool,
}

#[derive(Clone)]
pub struct SubmissionRecorder {
    submissions: Arc<dyn SubmissionRepository>,
    scores: Arc<dyn ScoreRepository>,
}

impl SubmissionRecorder {
    pub fn new(
        submissions: Arc<dyn SubmissionRepository>,
        scores: Arc<dyn ScoreRepository>,
    ) -> Self {
        Self {
            submissions,
            scores,
        }
    }

    /// Inserts the submission row (every attempt, pass or fail), then on
    /// a passed attempt credits the aggregate iff this is the user's
    /// first solve of the problem.
    ///
    /// A failed submission insert is terminal. A failed credit after a
    /// successful insert is logged and swallowed: the submission history
    /// is the source of truth and the aggregate can be recomputed.
    pub async fn record_and_aggregate(
        &self,
        new_submission: NewSubmission,
    ) -> Result<RecordOutcome> {
        let record = self.submissions.create(new_submission).await?;

        let mut first_solve = false;
        if record.status.is_passed() {
            match self
                .scores
                .credit_first_solve(record.user_id, &record.problem_slug, record.points)
                .await
            {
                Ok(credited) => {
                    first_solve = credited;
                    if credited {
                        info!(
                            user_id = %record.user_id,
                            problem = %record.problem_slug,
                            points = record.points,
                            "first solve credited"
                        );
                    }
                }
                Err(err) => {
                    warn!(
                        user_id = %record.user_id,
                        problem = %record.problem_slug,
                        error = %err,
                        "failed to credit aggregate score after submission insert"
                    );
                }
            }
        }

        Ok(RecordOutcome {
            submission_id: record.id,
            first_solve,
        })
    }

    pub async fn total_points(&self, user_id: UserId) -> Result<i64> {
        self.scores.total_points(user_id).await
    }

    /// Rebuilds the aggregate from submission history: best awarded
    /// points per distinct passed problem, summed. Used to repair drift.
    pub async fn recalculate_total(&self, user_id: UserId) -> Result<i64> {
        let submissions = self.submissions.list_by_user(user_id).await?;

        let mut best_by_problem: HashMap<String, i64> = HashMap::new();
        for submission in submissions.iter().filter(|s| s.status.is_passed()) {
            let best = best_by_problem
                .entry(submission.problem_slug.as_str().to_string())
                .or_insert(0);
            *best = (*best).max(i64::from(submission.points));
        }

        let total = best_by_problem.values().sum();
        self.scores.set_total(user_id, total).await?;

        info!(user_id = %user_id, total_points = total, "aggregate score recalculated");
        Ok(total)
    }
}
