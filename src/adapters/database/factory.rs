//! Datastore factory
//!
//! Builds the PostgreSQL-backed store from configuration and hands it out
//! as a trait object so the core stays decoupled from the concrete backend.

use crate::adapters::database::traits::IntakeStore;
use crate::adapters::postgresql::{PostgresClient, PostgresStore};
use crate::config::IntakeConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Create the datastore client from configuration
///
/// Connects the pool, verifies connectivity, and ensures the schema exists.
///
/// # Errors
///
/// Returns an error if the pool cannot be built or the datastore is
/// unreachable.
pub async fn create_store(config: &IntakeConfig) -> Result<Arc<dyn IntakeStore>> {
    let client = PostgresClient::new(config.database.clone()).await?;
    client.test_connection().await?;

    let store = PostgresStore::new(client);
    store.ensure_schema().await?;

    tracing::info!("Datastore initialized");
    Ok(Arc::new(store))
}
