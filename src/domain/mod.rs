//! Domain models and types for the intake service.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`PatientId`], [`ProfileId`])
//! - **Domain models** ([`Patient`], [`Profile`], [`OrderRow`])
//! - **The location prefix table** ([`LocationPrefixMap`])
//! - **Error types** ([`IntakeError`]) and the [`Result`] alias
//!
//! # Type Safety
//!
//! Identifiers use the newtype pattern to prevent mixing ID kinds:
//!
//! ```rust
//! use intake::domain::{PatientId, ProfileId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let patient_id = PatientId::new("HERO001")?;
//! let profile_id = ProfileId::new(7)?;
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: PatientId = profile_id;  // Compile error!
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, IntakeError>`]:
//!
//! ```rust
//! use intake::domain::{IntakeError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(IntakeError::InvalidLocation("Atlantis".to_string()))
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod locations;
pub mod order;
pub mod patient;
pub mod profile;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::IntakeError;
pub use ids::{PatientId, ProfileId};
pub use locations::LocationPrefixMap;
pub use order::{OrderRow, OrderSubmission};
pub use patient::{Gender, NewPatient, NewPatientBuilder, Patient};
pub use profile::{Profile, TestList};
pub use result::Result;
