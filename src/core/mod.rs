//! Core business logic for the intake service.
//!
//! # Modules
//!
//! - [`allocation`] - Patient identifier allocation within location namespaces
//! - [`registration`] - Patient registration with retry-bounded allocation
//! - [`orders`] - Atomic order submission (validate, expand, persist)
//!
//! # Registration Workflow
//!
//! 1. **Resolve**: Map the care-location name to its identifier prefix
//! 2. **Allocate**: Scan the namespace and derive the next identifier
//! 3. **Persist**: Insert the patient row; on identifier conflict, re-read
//!    and reattempt a bounded number of times
//!
//! # Order Submission Workflow
//!
//! 1. **Validate**: Patient exists, then profile exists
//! 2. **Expand**: Parse the profile's test list into surviving tokens
//! 3. **Write**: Insert one row per token inside a single transaction;
//!    commit all or roll back all
//!
//! # Example
//!
//! ```rust,no_run
//! use intake::adapters::database::create_store;
//! use intake::config::load_config;
//! use intake::core::allocation::PatientIdentifierAllocator;
//! use intake::core::registration::Registrar;
//! use intake::domain::LocationPrefixMap;
//!
//! # async fn example(request: intake::domain::NewPatient) -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("intake.toml")?;
//! let store = create_store(&config).await?;
//!
//! let locations = LocationPrefixMap::new(config.locations.clone())?;
//! let allocator = PatientIdentifierAllocator::new(store.clone(), locations);
//! let registrar = Registrar::new(
//!     allocator,
//!     store,
//!     config.allocation.max_attempts,
//!     config.application.dry_run,
//! );
//!
//! let patient_id = registrar.register(request).await?;
//! println!("Registered {patient_id}");
//! # Ok(())
//! # }
//! ```

pub mod allocation;
pub mod orders;
pub mod registration;

pub use allocation::PatientIdentifierAllocator;
pub use orders::{OrderSubmissionTransaction, SubmissionReceipt};
pub use registration::Registrar;
