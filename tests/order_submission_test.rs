//! Integration tests for atomic order submission

mod common;

use common::{seeded_patient, MemoryStore};
use intake::core::orders::OrderSubmissionTransaction;
use intake::domain::ids::{PatientId, ProfileId};
use intake::domain::order::OrderSubmission;
use intake::domain::IntakeError;
use std::sync::Arc;

fn submission(patient: &str, profile: i32, urgent: bool, comments: Option<&str>) -> OrderSubmission {
    OrderSubmission::new(
        PatientId::new(patient).unwrap(),
        ProfileId::new(profile).unwrap(),
        urgent,
        comments.map(str::to_string),
    )
}

async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.add_patient(seeded_patient("HERO001")).await;
    store.add_profile(3, "Admission bloods", "CBC, LFT, U&E").await;
    store.add_profile(4, "Empty profile", " ,  , ").await;
    store
}

#[tokio::test]
async fn submission_expands_to_one_row_per_test() {
    let store = seeded_store().await;
    let transaction = OrderSubmissionTransaction::new(store.clone(), false);

    let receipt = transaction
        .submit(submission("HERO001", 3, true, Some("fasting sample")))
        .await
        .unwrap();
    assert_eq!(receipt.rows_written, 3);

    let orders = store.orders().await;
    assert_eq!(orders.len(), 3);

    let tests: Vec<&str> = orders.iter().map(|r| r.requested_test.as_str()).collect();
    assert_eq!(tests, ["CBC", "LFT", "U&E"]);

    for row in &orders {
        assert_eq!(row.patient_id.as_str(), "HERO001");
        assert_eq!(row.requested_profile.value(), 3);
        assert!(row.urgent);
        assert_eq!(row.comments.as_deref(), Some("fasting sample"));
        assert!(!row.processed);
    }
}

#[tokio::test]
async fn unknown_patient_writes_nothing() {
    let store = seeded_store().await;
    let transaction = OrderSubmissionTransaction::new(store.clone(), false);

    let err = transaction
        .submit(submission("LIFE999", 3, false, None))
        .await
        .unwrap_err();

    assert!(matches!(err, IntakeError::UnknownPatient(id) if id == "LIFE999"));
    assert!(store.orders().await.is_empty());
}

#[tokio::test]
async fn unknown_profile_writes_nothing() {
    let store = seeded_store().await;
    let transaction = OrderSubmissionTransaction::new(store.clone(), false);

    let err = transaction
        .submit(submission("HERO001", 42, false, None))
        .await
        .unwrap_err();

    assert!(matches!(err, IntakeError::UnknownProfile(id) if id == "42"));
    assert!(store.orders().await.is_empty());
}

#[tokio::test]
async fn empty_profile_is_an_error_not_a_silent_noop() {
    let store = seeded_store().await;
    let transaction = OrderSubmissionTransaction::new(store.clone(), false);

    let err = transaction
        .submit(submission("HERO001", 4, false, None))
        .await
        .unwrap_err();

    assert!(matches!(err, IntakeError::EmptyProfile(id) if id == "4"));
    assert!(store.orders().await.is_empty());
}

#[tokio::test]
async fn mid_write_failure_rolls_back_the_whole_submission() {
    let store = seeded_store().await;
    let transaction = OrderSubmissionTransaction::new(store.clone(), false);

    // Fail while writing the second of three rows.
    store.fail_order_insert_at(1).await;

    let err = transaction
        .submit(submission("HERO001", 3, false, None))
        .await
        .unwrap_err();

    assert!(matches!(err, IntakeError::PersistenceFailure(_)));
    assert!(err.is_retryable());
    // Observed row count for a submission is always 0 or len(tokens).
    assert!(store.orders().await.is_empty());

    // Retrying the identical submission succeeds once the fault clears.
    let receipt = transaction
        .submit(submission("HERO001", 3, false, None))
        .await
        .unwrap();
    assert_eq!(receipt.rows_written, 3);
    assert_eq!(store.orders().await.len(), 3);
}

#[tokio::test]
async fn preconditions_checked_in_order() {
    // Both the patient and the profile are unknown; the patient gate fires
    // first.
    let store = Arc::new(MemoryStore::new());
    let transaction = OrderSubmissionTransaction::new(store.clone(), false);

    let err = transaction
        .submit(submission("LIFE999", 42, false, None))
        .await
        .unwrap_err();

    assert!(matches!(err, IntakeError::UnknownPatient(_)));
}

#[tokio::test]
async fn dry_run_validates_and_expands_without_writing() {
    let store = seeded_store().await;
    let transaction = OrderSubmissionTransaction::new(store.clone(), true);

    let receipt = transaction
        .submit(submission("HERO001", 3, false, None))
        .await
        .unwrap();
    assert_eq!(receipt.rows_written, 3);
    assert!(store.orders().await.is_empty());

    // Validation gates still run in dry-run mode.
    let err = transaction
        .submit(submission("HERO001", 4, false, None))
        .await
        .unwrap_err();
    assert!(matches!(err, IntakeError::EmptyProfile(_)));
}

#[tokio::test]
async fn consecutive_submissions_accumulate() {
    let store = seeded_store().await;
    store.add_patient(seeded_patient("HERO002")).await;
    let transaction = OrderSubmissionTransaction::new(store.clone(), false);

    transaction
        .submit(submission("HERO001", 3, false, None))
        .await
        .unwrap();
    transaction
        .submit(submission("HERO002", 3, true, Some("ward round")))
        .await
        .unwrap();

    let orders = store.orders().await;
    assert_eq!(orders.len(), 6);
    assert_eq!(
        orders.iter().filter(|r| r.patient_id.as_str() == "HERO002").count(),
        3
    );
}
