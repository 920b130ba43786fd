//! Order submission transaction
//!
//! Turns one order-submission request into a durable, atomic set of
//! per-test order rows, or no rows at all. A submission moves through
//! Received -> Validated -> Expanded -> Writing and terminates as
//! Committed, Rejected (precondition failure, no writes), or RolledBack
//! (mid-transaction failure). The states are traced, not persisted.

use crate::adapters::database::IntakeStore;
use crate::domain::order::OrderSubmission;
use crate::domain::{IntakeError, Result};
use std::sync::Arc;

/// Success acknowledgment for a committed submission
///
/// Order rows are identified by their composite content; no generated
/// identifiers are returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Number of order rows the submission committed
    pub rows_written: usize,
}

/// Validates, expands, and atomically persists order submissions
pub struct OrderSubmissionTransaction {
    store: Arc<dyn IntakeStore>,
    dry_run: bool,
}

impl OrderSubmissionTransaction {
    /// Creates the submission service over the given store
    pub fn new(store: Arc<dyn IntakeStore>, dry_run: bool) -> Self {
        Self { store, dry_run }
    }

    /// Submits one order, committing all of its rows or none
    ///
    /// Preconditions are enforced in order: the patient must exist
    /// (`UnknownPatient`), then the profile must exist (`UnknownProfile`).
    /// A profile whose test list expands to nothing is rejected with
    /// `EmptyProfile` rather than silently writing zero rows. Any failure
    /// during the write phase rolls back the whole set and surfaces as
    /// `PersistenceFailure`; the caller may safely resubmit.
    pub async fn submit(&self, submission: OrderSubmission) -> Result<SubmissionReceipt> {
        if !self.store.patient_exists(&submission.patient_id).await? {
            return Err(IntakeError::UnknownPatient(
                submission.patient_id.to_string(),
            ));
        }

        let profile = self
            .store
            .find_profile(submission.profile_id)
            .await?
            .ok_or_else(|| IntakeError::UnknownProfile(submission.profile_id.to_string()))?;

        tracing::debug!(
            patient_id = %submission.patient_id,
            profile_id = %submission.profile_id,
            "Submission validated"
        );

        let tests = profile.test_list();
        if tests.is_empty() {
            return Err(IntakeError::EmptyProfile(profile.id.to_string()));
        }

        let rows = submission.expand(&tests);

        tracing::debug!(
            patient_id = %submission.patient_id,
            profile_id = %submission.profile_id,
            rows = rows.len(),
            "Submission expanded"
        );

        if self.dry_run {
            tracing::info!(
                patient_id = %submission.patient_id,
                profile_id = %submission.profile_id,
                rows = rows.len(),
                "DRY RUN: would insert order rows"
            );
            return Ok(SubmissionReceipt {
                rows_written: rows.len(),
            });
        }

        self.store.insert_orders(&rows).await?;

        tracing::info!(
            patient_id = %submission.patient_id,
            profile_id = %submission.profile_id,
            rows = rows.len(),
            urgent = submission.urgent,
            "Order submission committed"
        );

        Ok(SubmissionReceipt {
            rows_written: rows.len(),
        })
    }
}
