//! PostgreSQL adapter implementing the datastore trait
//!
//! This module provides the implementation of the [`IntakeStore`] trait for
//! PostgreSQL. It owns the transactional guarantees the core relies on: the
//! primary key on `patients.patient_id` turns a concurrent-allocation race
//! into a detectable conflict, and a submission's order rows are written
//! inside a single transaction scope.

use crate::adapters::database::traits::IntakeStore;
use crate::adapters::postgresql::client::PostgresClient;
use crate::adapters::postgresql::models::{patient_from_row, profile_from_row, PATIENT_COLUMNS};
use crate::domain::ids::{PatientId, ProfileId};
use crate::domain::order::OrderRow;
use crate::domain::patient::Patient;
use crate::domain::profile::Profile;
use crate::domain::{IntakeError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_postgres::error::SqlState;

/// PostgreSQL implementation of the datastore trait
pub struct PostgresStore {
    client: Arc<PostgresClient>,
}

impl PostgresStore {
    /// Create a new PostgreSQL store
    pub fn new(client: PostgresClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<PostgresClient> {
        &self.client
    }
}

#[async_trait]
impl IntakeStore for PostgresStore {
    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.client.ensure_schema().await
    }

    async fn identifiers_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let query = "SELECT patient_id FROM patients WHERE patient_id LIKE $1 || '%'";

        let rows = self.client.query(query, &[&prefix]).await?;

        tracing::debug!(
            prefix = %prefix,
            count = rows.len(),
            "Scanned identifier namespace"
        );

        Ok(rows.iter().map(|row| row.get("patient_id")).collect())
    }

    async fn insert_patient(&self, patient: &Patient) -> Result<()> {
        let insert_query = r#"
            INSERT INTO patients (
                patient_id, last_name, first_name, middle_name, title,
                date_of_birth, gender, address1, address2, address_city,
                address_state, address_post_code, address_country,
                phone_number, processed
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        "#;

        let client = self.client.get_connection().await?;
        self.client.apply_statement_timeout(&client).await?;

        let result = client
            .execute(
                insert_query,
                &[
                    &patient.id.as_str(),
                    &patient.last_name,
                    &patient.first_name,
                    &patient.middle_name,
                    &patient.title,
                    &patient.date_of_birth,
                    &patient.gender.code(),
                    &patient.address1,
                    &patient.address2,
                    &patient.address_city,
                    &patient.address_state,
                    &patient.address_post_code,
                    &patient.address_country,
                    &patient.phone_number,
                    &patient.processed,
                ],
            )
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if e.code() == Some(&SqlState::UNIQUE_VIOLATION) => {
                tracing::warn!(
                    patient_id = %patient.id,
                    "Identifier claimed by a concurrent registration"
                );
                Err(IntakeError::AllocationConflict(patient.id.to_string()))
            }
            Err(e) => Err(IntakeError::Database(format!(
                "Failed to insert patient: {e}"
            ))),
        }
    }

    async fn patient_exists(&self, id: &PatientId) -> Result<bool> {
        let query = "SELECT EXISTS(SELECT 1 FROM patients WHERE patient_id = $1)";

        let rows = self.client.query(query, &[&id.as_str()]).await?;

        if let Some(row) = rows.first() {
            let exists: bool = row.get(0);
            Ok(exists)
        } else {
            Ok(false)
        }
    }

    async fn find_profile(&self, id: ProfileId) -> Result<Option<Profile>> {
        let query = "SELECT id, profile_name, tests FROM profiles WHERE id = $1";

        let rows = self.client.query(query, &[&id.value()]).await?;

        match rows.first() {
            Some(row) => Ok(Some(profile_from_row(row)?)),
            None => Ok(None),
        }
    }

    async fn insert_orders(&self, rows: &[OrderRow]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let mut client = self.client.get_connection().await?;
        self.client.apply_statement_timeout(&client).await?;

        // One transaction scope per submission: readers observe all rows or
        // none, and any failed insert rolls the whole set back.
        let transaction = client.transaction().await.map_err(|e| {
            IntakeError::PersistenceFailure(format!("Failed to begin transaction: {e}"))
        })?;

        let insert_query = r#"
            INSERT INTO orders (
                patient_id, requested_profile, requested_test,
                urgent, comments, processed
            )
            VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        let statement = transaction.prepare(insert_query).await.map_err(|e| {
            IntakeError::PersistenceFailure(format!("Failed to prepare insert: {e}"))
        })?;

        for row in rows {
            if let Err(e) = transaction
                .execute(
                    &statement,
                    &[
                        &row.patient_id.as_str(),
                        &row.requested_profile.value(),
                        &row.requested_test,
                        &row.urgent,
                        &row.comments,
                        &row.processed,
                    ],
                )
                .await
            {
                tracing::error!(
                    patient_id = %row.patient_id,
                    requested_test = %row.requested_test,
                    error = %e,
                    "Order insert failed, rolling back submission"
                );
                // Explicit rollback; a failed rollback is its own error.
                transaction.rollback().await.map_err(|e| {
                    IntakeError::PersistenceFailure(format!("Rollback failed: {e}"))
                })?;
                return Err(IntakeError::PersistenceFailure(format!(
                    "Order insert failed: {e}"
                )));
            }
        }

        transaction
            .commit()
            .await
            .map_err(|e| IntakeError::PersistenceFailure(format!("Commit failed: {e}")))?;

        tracing::debug!(count = rows.len(), "Order submission committed");
        Ok(())
    }

    async fn list_patients(&self) -> Result<Vec<Patient>> {
        let query = format!("SELECT {PATIENT_COLUMNS} FROM patients ORDER BY patient_id");

        let rows = self.client.query(&query, &[]).await?;

        rows.iter().map(patient_from_row).collect()
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        let query = "SELECT id, profile_name, tests FROM profiles ORDER BY id";

        let rows = self.client.query(query, &[]).await?;

        rows.iter().map(profile_from_row).collect()
    }
}
