use crate::entity::{problem_solve, user_score};
use anyhow::Result;
use async_trait::async_trait;
use codeclub_core::domain::{ProblemSlug, UserId};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, TransactionTrait};

/// Durable per-user aggregate plus the first-solve ledger behind it.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Credits `points` to the user's total iff this is the first solve
    /// of `slug` by this user. Returns whether the credit happened.
    ///
    /// The decision is made by the storage layer: a conflicting insert
    /// into the solve ledger means some other attempt was first. Two
    /// concurrent calls can never both return `true` for the same pair.
    async fn credit_first_solve(
        &self,
        user_id: UserId,
        slug: &ProblemSlug,
        points: u32,
    ) -> Result<bool>;

    async fn total_points(&self, user_id: UserId) -> Result<i64>;

    /// Overwrites the aggregate with a recomputed total.
    async fn set_total(&self, user_id: UserId, total: i64) -> Result<()>;
}

#[derive(Clone)]
pub struct SeaOrmScoreRepository {
    db: DatabaseConnection,
}

impl SeaOrmScoreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScoreRepository for SeaOrmScoreRepository {
    async fn credit_first_solve(
        &self,
        user_id: UserId,
        slug: &ProblemSlug,
        points: u32,
    ) -> Result<bool> {
        let txn = self.db.begin().await?;

        let inserted = problem_solve::Entity::insert(problem_solve::ActiveModel {
            user_id: Set(user_id.to_string()),
            problem_slug: Set(slug.as_str().to_string()),
            points: Set(i32::try_from(points)?),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                problem_solve::Column::UserId,
                problem_solve::Column::ProblemSlug,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        if inserted == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        // The credit is a single in-place increment, never a read
        // followed by a write.
        user_score::Entity::insert(user_score::ActiveModel {
            user_id: Set(user_id.to_string()),
            total_points: Set(i64::from(points)),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(user_score::Column::UserId)
                .value(
                    user_score::Column::TotalPoints,
                    Expr::col(user_score::Column::TotalPoints).add(i64::from(points)),
                )
                .value(user_score::Column::UpdatedAt, Expr::current_timestamp())
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        txn.commit().await?;
        Ok(true)
    }

    async fn total_points(&self, user_id: UserId) -> Result<i64> {
        let model = user_score::Entity::find_by_id(user_id.to_string())
            .one(&self.db)
            .await?;

        Ok(model.map(|row| row.total_points).unwrap_or(0))
    }

    async fn set_total(&self, user_id: UserId, total: i64) -> Result<()> {
        user_score::Entity::insert(user_score::ActiveModel {
            user_id: Set(user_id.to_string()),
            total_points: Set(total),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(user_score::Column::UserId)
                .value(user_score::Column::TotalPoints, total)
                .value(user_score::Column::UpdatedAt, Expr::current_timestamp())
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await?;

        Ok(())
    }
}
