// Intake - Clinical Intake Service
// Copyright (c) 2025 Intake Contributors
// Licensed under the MIT License

//! # Intake - Clinical Intake Service
//!
//! Intake supports front-desk and lab staff at clinical intake: registering
//! patients at a care location and submitting multi-test lab orders against
//! existing patients and predefined test profiles. The PostgreSQL datastore
//! is the system of record for patients, profiles, and orders.
//!
//! ## Overview
//!
//! The service provides two request paths, both stateless between calls:
//!
//! - **Registration** allocates the next unique, location-prefixed patient
//!   identifier (`HERO001`, `HERO002`, ...) and persists the patient row.
//!   Concurrent registrations at the same location are serialized through a
//!   uniqueness constraint plus a bounded re-read-and-reattempt loop.
//! - **Order submission** validates a patient+profile pair and expands the
//!   profile's test list into one order row per test, persisted inside a
//!   single transaction so readers never observe a partial submission.
//!
//! ## Architecture
//!
//! Intake follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (allocation, registration, order submission)
//! - [`adapters`] - Datastore integration (trait + PostgreSQL)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use intake::adapters::database::create_store;
//! use intake::config::load_config;
//! use intake::core::orders::OrderSubmissionTransaction;
//! use intake::domain::{OrderSubmission, PatientId, ProfileId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("intake.toml")?;
//!
//!     // Connect the datastore
//!     let store = create_store(&config).await?;
//!
//!     // Submit an order: one row per test in the profile, all or nothing
//!     let transaction = OrderSubmissionTransaction::new(store, false);
//!     let receipt = transaction
//!         .submit(OrderSubmission::new(
//!             PatientId::new("HERO001")?,
//!             ProfileId::new(3)?,
//!             false,
//!             None,
//!         ))
//!         .await?;
//!
//!     println!("Committed {} order rows", receipt.rows_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Intake uses the [`domain::IntakeError`] type for all errors. Validation
//! failures (`InvalidLocation`, `UnknownPatient`, `UnknownProfile`,
//! `EmptyProfile`) are detected before any write and are terminal for the
//! request; integrity failures (`CorruptSequence`, `AllocationConflict`)
//! are never silently repaired; persistence failures surface only after the
//! submission rolled back, so retrying the identical request is safe.
//!
//! ```rust,no_run
//! use intake::domain::IntakeError;
//!
//! fn example() -> Result<(), IntakeError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = intake::config::load_config("intake.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Intake uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!(patient_id = "HERO001", "Patient registered");
//! warn!(attempt = 2, "Identifier conflict, reallocating");
//! error!(error = "connection refused", "Submission failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
