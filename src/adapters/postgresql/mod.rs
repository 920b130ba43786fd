//! PostgreSQL datastore implementation
//!
//! Pooled client, row models, and the [`PostgresStore`] adapter backing
//! the [`IntakeStore`](crate::adapters::database::IntakeStore) trait.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgresStore;
pub use client::PostgresClient;
