use crate::entity::submission;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use codeclub_core::domain::{Language, ProblemSlug, SubmissionId, SubmissionStatus, UserId};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub user_id: UserId,
    pub problem_slug: ProblemSlug,
    pub language: Language,
    pub status: SubmissionStatus,
    pub source_code: String,
    pub runtime_ms: Option<u32>,
    pub points: u32,
}

#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub user_id: UserId,
    pub problem_slug: ProblemSlug,
    pub language: Language,
    pub status: SubmissionStatus,
    pub source_code: String,
    pub runtime_ms: Option<u32>,
    pub points: u32,
}

/// Append-only store of evaluation attempts. Rows are written exactly
/// once per attempt and never mutated or deleted here.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn create(&self, new_submission: NewSubmission) -> Result<SubmissionRecord>;
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<SubmissionRecord>>;
}

#[derive(Clone)]
pub struct SeaOrmSubmissionRepository {
    db: DatabaseConnection,
}

impl SeaOrmSubmissionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_language(code: i16) -> Result<Language> {
        match code {
            0 => Ok(Language::JavaScript),
            1 => Ok(Language::Python),
            2 => Ok(Language::Cpp),
            3 => Ok(Language::Java),
            _ => Err(anyhow!("invalid submission.language code from database: {code}")),
        }
    }

    fn map_language_code(language: Language) -> i16 {
        match language {
            Language::JavaScript => 0,
            Language::Python => 1,
            Language::Cpp => 2,
            Language::Java => 3,
        }
    }

    fn map_status(code: i16) -> Result<SubmissionStatus> {
        match code {
            0 => Ok(SubmissionStatus::Failed),
            1 => Ok(SubmissionStatus::Passed),
            _ => Err(anyhow!("invalid submission.status code from database: {code}")),
        }
    }

    fn map_status_code(status: SubmissionStatus) -> i16 {
        match status {
            SubmissionStatus::Failed => 0,
            SubmissionStatus::Passed => 1,
        }
    }

    fn map_model(model: submission::Model) -> Result<SubmissionRecord> {
        let id = SubmissionId::from_str(&model.id)
            .map_err(|e| anyhow!("invalid submission.id '{}' from database: {e}", model.id))?;
        let user_id = UserId::from_str(&model.user_id).map_err(|e| {
            anyhow!(
                "invalid submission.user_id '{}' from database: {e}",
                model.user_id
            )
        })?;
        let problem_slug = ProblemSlug::new(model.problem_slug.clone()).map_err(|e| {
            anyhow!(
                "invalid submission.problem_slug '{}' from database: {e}",
                model.problem_slug
            )
        })?;

        let runtime_ms = model
            .runtime_ms
            .map(|value| {
                u32::try_from(value).map_err(|_| {
                    anyhow!("invalid submission.runtime_ms from database: {value}")
                })
            })
            .transpose()?;

        let points = u32::try_from(model.points).map_err(|_| {
            anyhow!(
                "invalid submission.points from database: {} (must be non-negative)",
                model.points
            )
        })?;

        Ok(SubmissionRecord {
            id,
            user_id,
            problem_slug,
            language: Self::map_language(model.language)?,
            status: Self::map_status(model.status)?,
            source_code: model.source_code,
            runtime_ms,
            points,
        })
    }
}

#[async_trait]
impl SubmissionRepository for SeaOrmSubmissionRepository {
    async fn create(&self, new_submission: NewSubmission) -> Result<SubmissionRecord> {
        let id = SubmissionId::new();

        let active_model = submission::ActiveModel {
            id: Set(id.to_string()),
            user_id: Set(new_submission.user_id.to_string()),
            problem_slug: Set(new_submission.problem_slug.as_str().to_string()),
            language: Set(Self::map_language_code(new_submission.language)),
            status: Set(Self::map_status_code(new_submission.status)),
            source_code: Set(new_submission.source_code),
            runtime_ms: Set(new_submission.runtime_ms.map(|value| value as i32)),
            points: Set(i32::try_from(new_submission.points)?),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Self::map_model(model)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<SubmissionRecord>> {
        let models = submission::Entity::find()
            .filter(submission::Column::UserId.eq(user_id.to_string()))
            .all(&self.db)
            .await?;

        models.into_iter().map(Self::map_model).collect()
    }
}
