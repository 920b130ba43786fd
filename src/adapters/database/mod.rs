//! Datastore abstraction layer
//!
//! Trait-based abstraction over the backing datastore, plus the factory
//! that builds the concrete PostgreSQL implementation from configuration.

pub mod factory;
pub mod traits;

pub use factory::create_store;
pub use traits::IntakeStore;
