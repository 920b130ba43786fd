//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output
//! - Optional local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use intake::config::LoggingConfig;
//! use intake::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
