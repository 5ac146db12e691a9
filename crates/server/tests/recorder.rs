mod common;

use codeclub_core::domain::{SubmissionStatus, UserId};
use codeclub_server::repository::SubmissionRepository;

use common::{new_submission, submission_repository, test_db, test_recorder};

#[tokio::test]
async fn first_solve_credits_the_aggregate_exactly_once() {
    let db = test_db().await;
    let recorder = test_recorder(&db);
    let user = UserId::new();

    let first = recorder
        .record_and_aggregate(new_submission(user, "two-sum", SubmissionStatus::Passed, 80))
        .await
        .expect("first submission should record");
    assert!(first.first_solve);

    let second = recorder
        .record_and_aggregate(new_submission(user, "two-sum", SubmissionStatus::Passed, 95))
        .await
        .expect("resubmission should record");
    assert!(!second.first_solve);

    let total = recorder
        .total_points(user)
        .await
        .expect("total should be readable");
    assert_eq!(total, 80, "only the first solve may credit the aggregate");

    let submissions = submission_repository(&db)
        .list_by_user(user)
        .await
        .expect("submissions should list");
    assert_eq!(submissions.len(), 2, "every attempt gets its own row");
}

#[tokio::test]
async fn concurrent_passed_submissions_credit_only_one() {
    let db = test_db().await;
    let recorder = test_recorder(&db);
    let user = UserId::new();

    let (left, right) = tokio::join!(
        recorder.record_and_aggregate(new_submission(
            user,
            "two-sum",
            SubmissionStatus::Passed,
            100
        )),
        recorder.record_and_aggregate(new_submission(
            user,
            "two-sum",
            SubmissionStatus::Passed,
            100
        )),
    );

    let left = left.expect("left submission should record");
    let right = right.expect("right submission should record");

    assert!(
        left.first_solve != right.first_solve,
        "exactly one concurrent submission may be the first solve"
    );

    let total = recorder
        .total_points(user)
        .await
        .expect("total should be readable");
    assert_eq!(total, 100);
}

#[tokio::test]
async fn failed_submissions_never_touch_the_aggregate() {
    let db = test_db().await;
    let recorder = test_recorder(&db);
    let user = UserId::new();

    let outcome = recorder
        .record_and_aggregate(new_submission(user, "two-sum", SubmissionStatus::Failed, 0))
        .await
        .expect("failed submission should still record");
    assert!(!outcome.first_solve);

    let total = recorder
        .total_points(user)
        .await
        .expect("total should be readable");
    assert_eq!(total, 0);

    let submissions = submission_repository(&db)
        .list_by_user(user)
        .await
        .expect("submissions should list");
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].status, SubmissionStatus::Failed);
    assert_eq!(submissions[0].points, 0);
}

#[tokio::test]
async fn solves_of_distinct_problems_accumulate() {
    let db = test_db().await;
    let recorder = test_recorder(&db);
    let user = UserId::new();

    recorder
        .record_and_aggregate(new_submission(user, "two-sum", SubmissionStatus::Passed, 100))
        .await
        .expect("first problem should record");
    recorder
        .record_and_aggregate(new_submission(user, "fizz-buzz", SubmissionStatus::Passed, 50))
        .await
        .expect("second problem should record");

    let total = recorder
        .total_points(user)
        .await
        .expect("total should be readable");
    assert_eq!(total, 150);
}

#[tokio::test]
async fn recalculation_rebuilds_the_total_from_history() {
    let db = test_db().await;
    let recorder = test_recorder(&db);
    let user = UserId::new();

    recorder
        .record_and_aggregate(new_submission(user, "two-sum", SubmissionStatus::Passed, 80))
        .await
        .expect("submission should record");
    recorder
        .record_and_aggregate(new_submission(user, "two-sum", SubmissionStatus::Passed, 100))
        .await
        .expect("resubmission should record");
    recorder
        .record_and_aggregate(new_submission(user, "fizz-buzz", SubmissionStatus::Passed, 50))
        .await
        .expect("submission should record");
    recorder
        .record_and_aggregate(new_submission(user, "hard-one", SubmissionStatus::Failed, 0))
        .await
        .expect("failed submission should record");

    // The live aggregate only saw the first solve of each problem.
    assert_eq!(
        recorder.total_points(user).await.expect("total readable"),
        130
    );

    let recalculated = recorder
        .recalculate_total(user)
        .await
        .expect("recalculation should succeed");

    assert_eq!(recalculated, 150, "best points per solved problem, summed");
    assert_eq!(
        recorder.total_points(user).await.expect("total readable"),
        150
    );
}
