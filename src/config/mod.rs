//! Configuration management for the intake service.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! The service uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`INTAKE_*` prefix)
//! - Default values for optional settings
//! - Comprehensive validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use intake::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("intake.toml")?;
//!
//! println!("Pool size: {}", config.database.max_connections);
//! println!("Locations: {}", config.locations.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! dry_run = false
//!
//! [database]
//! connection_string = "${INTAKE_DATABASE_URL}"
//! max_connections = 10
//!
//! [allocation]
//! max_attempts = 5
//!
//! [locations]
//! "Superhero" = "HERO"
//! "Test" = "DOOTEST"
//! "Real Life" = "LIFE"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used items
pub use loader::load_config;
pub use schema::{
    AllocationConfig, ApplicationConfig, DatabaseConfig, IntakeConfig, LoggingConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
