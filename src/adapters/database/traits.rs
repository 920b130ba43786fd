//! Datastore abstraction trait
//!
//! This module defines the trait that datastore adapters must implement to
//! back the intake core. The core never holds state between calls; every
//! read and write goes through this boundary, and the adapter owns the
//! transactional guarantees the core relies on.

use crate::domain::ids::{PatientId, ProfileId};
use crate::domain::order::OrderRow;
use crate::domain::patient::Patient;
use crate::domain::profile::Profile;
use crate::domain::Result;
use async_trait::async_trait;

/// Datastore interface for patients, profiles, and orders
///
/// Contract notes for implementors:
///
/// - [`insert_patient`](IntakeStore::insert_patient) must enforce global
///   identifier uniqueness and surface a duplicate as
///   [`IntakeError::AllocationConflict`](crate::domain::IntakeError::AllocationConflict)
///   so the registration flow can re-read and reattempt.
/// - [`insert_orders`](IntakeStore::insert_orders) must write the whole row
///   set inside one transaction scope: other readers observe either none of
///   a submission's rows or all of them, and any mid-set failure rolls the
///   set back and surfaces as
///   [`IntakeError::PersistenceFailure`](crate::domain::IntakeError::PersistenceFailure).
#[async_trait]
pub trait IntakeStore: Send + Sync {
    /// Test the datastore connection
    ///
    /// # Errors
    ///
    /// Returns an error if the connection test fails.
    async fn test_connection(&self) -> Result<()>;

    /// Ensure the schema exists, creating tables if necessary
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created or accessed.
    async fn ensure_schema(&self) -> Result<()>;

    /// All patient identifiers belonging to a location namespace
    ///
    /// Returns every identifier whose value starts with `prefix`. Ordering
    /// is unspecified; the allocator compares numeric suffixes itself so
    /// that unevenly padded legacy identifiers order correctly.
    async fn identifiers_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;

    /// Insert a newly registered patient row
    ///
    /// # Errors
    ///
    /// Returns `AllocationConflict` when the identifier is already taken,
    /// any other failure as a database error.
    async fn insert_patient(&self, patient: &Patient) -> Result<()>;

    /// Whether a patient identifier exists in the patient set
    async fn patient_exists(&self, id: &PatientId) -> Result<bool>;

    /// Fetch a profile by key
    ///
    /// Returns `Ok(None)` when the profile does not exist.
    async fn find_profile(&self, id: ProfileId) -> Result<Option<Profile>>;

    /// Atomically insert every order row of one submission
    ///
    /// # Errors
    ///
    /// Returns `PersistenceFailure` after rolling back if any insert fails;
    /// no partial row set is ever visible to other readers.
    async fn insert_orders(&self, rows: &[OrderRow]) -> Result<()>;

    /// Read-only projection of the patient set
    async fn list_patients(&self) -> Result<Vec<Patient>>;

    /// Read-only projection of the profile set
    async fn list_profiles(&self) -> Result<Vec<Profile>>;
}
