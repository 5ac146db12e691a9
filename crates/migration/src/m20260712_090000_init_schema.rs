use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Submission::Table)
                    .if_not_exists()
                    .col(string_len(Submission::Id, 36).primary_key())
                    // User identity is owned by the external session provider,
                    // so there is no local user table to reference.
                    .col(string_len(Submission::UserId, 36))
                    .col(string_len(Submission::ProblemSlug, 200))
                    // Language enum is represented in app code.
                    // 0=javascript, 1=python, 2=c++, 3=java
                    .col(
                        small_integer(Submission::Language)
                            .check(Expr::col(Submission::Language).gte(0))
                            .check(Expr::col(Submission::Language).lte(3)),
                    )
                    // SubmissionStatus enum is represented in app code.
                    // 0=failed, 1=passed
                    .col(
                        small_integer(Submission::Status)
                            .check(Expr::col(Submission::Status).gte(0))
                            .check(Expr::col(Submission::Status).lte(1)),
                    )
                    .col(text(Submission::SourceCode))
                    .col(integer_null(Submission::RuntimeMs))
                    .col(
                        integer(Submission::Points)
                            .default(0)
                            .check(Expr::col(Submission::Points).gte(0)),
                    )
                    .col(timestamp(Submission::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        // First-solve ledger. The composite primary key is the storage-level
        // uniqueness guard: a conflicting insert is the authoritative
        // "already solved" signal.
        manager
            .create_table(
                Table::create()
                    .table(ProblemSolve::Table)
                    .if_not_exists()
                    .col(string_len(ProblemSolve::UserId, 36))
                    .col(string_len(ProblemSolve::ProblemSlug, 200))
                    .col(
                        integer(ProblemSolve::Points)
                            .default(0)
                            .check(Expr::col(ProblemSolve::Points).gte(0)),
                    )
                    .col(timestamp(ProblemSolve::SolvedAt).default(Expr::current_timestamp()))
                    .primary_key(
                        Index::create()
                            .col(ProblemSolve::UserId)
                            .col(ProblemSolve::ProblemSlug),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserScore::Table)
                    .if_not_exists()
                    .col(string_len(UserScore::UserId, 36).primary_key())
                    .col(big_integer(UserScore::TotalPoints).default(0))
                    .col(timestamp(UserScore::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_submission_user_id")
                    .table(Submission::Table)
                    .col(Submission::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_submission_problem_slug")
                    .table(Submission::Table)
                    .col(Submission::ProblemSlug)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_submission_user_problem_status")
                    .table(Submission::Table)
                    .col(Submission::UserId)
                    .col(Submission::ProblemSlug)
                    .col(Submission::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserScore::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProblemSolve::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submission::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Submission {
    Table,
    Id,
    UserId,
    ProblemSlug,
    Language,
    Status,
    SourceCode,
    RuntimeMs,
    Points,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProblemSolve {
    Table,
    UserId,
    ProblemSlug,
    Points,
    SolvedAt,
}

#[derive(DeriveIden)]
enum UserScore {
    Table,
    UserId,
    TotalPoints,
    UpdatedAt,
}
