//! Shared test fixtures
//!
//! An in-memory implementation of the datastore trait with the same
//! contract as the PostgreSQL adapter: patient identifier uniqueness
//! surfaces as `AllocationConflict`, and order-set inserts are
//! all-or-nothing with an injectable failure hook. Not every test binary
//! uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use intake::adapters::database::IntakeStore;
use intake::domain::ids::{PatientId, ProfileId};
use intake::domain::order::OrderRow;
use intake::domain::patient::{Gender, NewPatient, Patient};
use intake::domain::profile::Profile;
use intake::domain::{IntakeError, Result};
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Default)]
struct Inner {
    patients: BTreeMap<String, Patient>,
    profiles: BTreeMap<i32, Profile>,
    orders: Vec<OrderRow>,
    fail_order_insert_at: Option<usize>,
}

/// In-memory datastore for exercising the core against the trait contract
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a profile row
    pub async fn add_profile(&self, id: i32, name: &str, tests: &str) {
        let mut inner = self.inner.lock().await;
        inner.profiles.insert(
            id,
            Profile {
                id: ProfileId::new(id).unwrap(),
                name: name.to_string(),
                tests: tests.to_string(),
            },
        );
    }

    /// Seeds a patient row directly, bypassing registration
    pub async fn add_patient(&self, patient: Patient) {
        let mut inner = self.inner.lock().await;
        inner
            .patients
            .insert(patient.id.as_str().to_string(), patient);
    }

    /// Arms the order-insert failure hook: the next submission whose row
    /// set reaches the given index fails before anything becomes visible
    pub async fn fail_order_insert_at(&self, index: usize) {
        let mut inner = self.inner.lock().await;
        inner.fail_order_insert_at = Some(index);
    }

    /// Snapshot of the committed order rows
    pub async fn orders(&self) -> Vec<OrderRow> {
        self.inner.lock().await.orders.clone()
    }

    /// Number of persisted patients
    pub async fn patient_count(&self) -> usize {
        self.inner.lock().await.patients.len()
    }

    /// Sorted snapshot of the persisted patient identifiers
    pub async fn patient_ids(&self) -> Vec<String> {
        self.inner.lock().await.patients.keys().cloned().collect()
    }
}

#[async_trait]
impl IntakeStore for MemoryStore {
    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn identifiers_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .patients
            .keys()
            .filter(|id| id.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn insert_patient(&self, patient: &Patient) -> Result<()> {
        // Widen the read-then-insert window so concurrent registrations
        // actually interleave.
        tokio::task::yield_now().await;

        let mut inner = self.inner.lock().await;
        if inner.patients.contains_key(patient.id.as_str()) {
            return Err(IntakeError::AllocationConflict(patient.id.to_string()));
        }
        inner
            .patients
            .insert(patient.id.as_str().to_string(), patient.clone());
        Ok(())
    }

    async fn patient_exists(&self, id: &PatientId) -> Result<bool> {
        let inner = self.inner.lock().await;
        Ok(inner.patients.contains_key(id.as_str()))
    }

    async fn find_profile(&self, id: ProfileId) -> Result<Option<Profile>> {
        let inner = self.inner.lock().await;
        Ok(inner.profiles.get(&id.value()).cloned())
    }

    async fn insert_orders(&self, rows: &[OrderRow]) -> Result<()> {
        let mut inner = self.inner.lock().await;

        if let Some(fail_at) = inner.fail_order_insert_at.take() {
            if fail_at < rows.len() {
                // The whole set rolls back; nothing staged before the
                // failing insert becomes visible.
                return Err(IntakeError::PersistenceFailure(format!(
                    "simulated insert failure at row {fail_at}"
                )));
            }
        }

        inner.orders.extend_from_slice(rows);
        Ok(())
    }

    async fn list_patients(&self) -> Result<Vec<Patient>> {
        let inner = self.inner.lock().await;
        Ok(inner.patients.values().cloned().collect())
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        let inner = self.inner.lock().await;
        Ok(inner.profiles.values().cloned().collect())
    }
}

/// A minimal valid registration request for the given location
pub fn registration_request(location: &str) -> NewPatient {
    NewPatient::builder()
        .last_name("Kent")
        .first_name("Clark")
        .date_of_birth(NaiveDate::from_ymd_opt(1978, 6, 18).unwrap())
        .gender(Gender::Male)
        .location(location)
        .build()
        .unwrap()
}

/// A seeded patient row with the given identifier
pub fn seeded_patient(id: &str) -> Patient {
    registration_request("Superhero").into_patient(PatientId::new(id).unwrap())
}
