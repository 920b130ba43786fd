//! External system integrations for the intake service.
//!
//! This module provides adapters for the backing datastore:
//!
//! - [`database`] - Datastore abstraction layer (trait-based)
//! - [`postgresql`] - PostgreSQL implementation
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with in-memory implementations. The database layer
//! uses trait-based abstraction so the core never touches a concrete
//! backend.

pub mod database;
pub mod postgresql;
