//! Patient registration flow
//!
//! The allocator's caller: resolves the location, allocates an identifier,
//! and persists the new patient row. Allocation's read-then-insert window
//! means two concurrent registrations at one location can derive the same
//! identifier; the datastore's uniqueness constraint turns that into an
//! [`IntakeError::AllocationConflict`], and this flow re-reads and
//! reattempts a bounded number of times before surfacing it.

use crate::adapters::database::IntakeStore;
use crate::core::allocation::PatientIdentifierAllocator;
use crate::domain::ids::PatientId;
use crate::domain::patient::NewPatient;
use crate::domain::{IntakeError, Result};
use std::sync::Arc;

/// Registers new patients with retry-bounded identifier allocation
pub struct Registrar {
    allocator: PatientIdentifierAllocator,
    store: Arc<dyn IntakeStore>,
    max_attempts: usize,
    dry_run: bool,
}

impl Registrar {
    /// Creates a registrar
    ///
    /// `max_attempts` bounds the re-read-and-reattempt cycles on identifier
    /// conflict; it is always at least 1.
    pub fn new(
        allocator: PatientIdentifierAllocator,
        store: Arc<dyn IntakeStore>,
        max_attempts: usize,
        dry_run: bool,
    ) -> Self {
        Self {
            allocator,
            store,
            max_attempts: max_attempts.max(1),
            dry_run,
        }
    }

    /// Registers a patient and returns the allocated identifier
    ///
    /// Validation failures (`InvalidLocation`) and integrity failures
    /// (`CorruptSequence`) surface before any write. A conflicting insert
    /// is retried with a fresh allocation up to the configured bound; any
    /// other insert failure propagates immediately.
    pub async fn register(&self, request: NewPatient) -> Result<PatientId> {
        let mut last_conflict = None;

        for attempt in 1..=self.max_attempts {
            let id = self.allocator.allocate(&request.location).await?;

            if self.dry_run {
                tracing::info!(
                    patient_id = %id,
                    location = %request.location,
                    "DRY RUN: would register patient"
                );
                return Ok(id);
            }

            let patient = request.clone().into_patient(id.clone());

            match self.store.insert_patient(&patient).await {
                Ok(()) => {
                    tracing::info!(
                        patient_id = %id,
                        location = %request.location,
                        attempt = attempt,
                        "Patient registered"
                    );
                    return Ok(id);
                }
                Err(IntakeError::AllocationConflict(taken)) => {
                    tracing::warn!(
                        patient_id = %taken,
                        attempt = attempt,
                        max_attempts = self.max_attempts,
                        "Identifier conflict, reallocating"
                    );
                    last_conflict = Some(IntakeError::AllocationConflict(taken));
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_conflict.unwrap_or_else(|| {
            IntakeError::AllocationConflict(format!(
                "allocation for location '{}' exhausted {} attempts",
                request.location, self.max_attempts
            ))
        }))
    }
}
