//! Domain error types
//!
//! This module defines the error hierarchy for the intake service. All errors
//! are domain-specific and don't expose third-party types. The variants fall
//! into three families with different propagation rules: validation errors
//! (terminal for the request, no writes performed), integrity errors (retried
//! internally before surfacing), and persistence errors (surfaced after
//! rollback, safe for the caller to retry).

use thiserror::Error;

/// Main intake error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Location name not present in the location prefix map
    #[error("Unknown location: {0}")]
    InvalidLocation(String),

    /// Patient identifier does not exist in the patient set
    #[error("Unknown patient identifier: {0}")]
    UnknownPatient(String),

    /// Profile identifier does not exist in the profile set
    #[error("Unknown profile identifier: {0}")]
    UnknownProfile(String),

    /// Profile test list expands to zero tests
    #[error("Profile {0} expands to an empty test list")]
    EmptyProfile(String),

    /// An existing identifier in a namespace has a non-numeric suffix
    #[error("Corrupt identifier sequence: {identifier} has a non-numeric suffix for prefix {prefix}")]
    CorruptSequence {
        /// Location prefix of the namespace being scanned
        prefix: String,
        /// The identifier that failed to parse
        identifier: String,
    },

    /// A concurrently registered patient claimed the same identifier
    #[error("Identifier {0} was claimed by a concurrent registration")]
    AllocationConflict(String),

    /// A failure during the transactional write phase; the submission was
    /// rolled back and no partial rows remain
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    /// Database-related errors (connection, pool, query)
    #[error("Database error: {0}")]
    Database(String),

    /// Validation errors not covered by a specific variant
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl IntakeError {
    /// Whether this error was detected before any write
    ///
    /// Validation errors are terminal for the request; the caller must fix
    /// the input rather than retry.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            IntakeError::InvalidLocation(_)
                | IntakeError::UnknownPatient(_)
                | IntakeError::UnknownProfile(_)
                | IntakeError::EmptyProfile(_)
                | IntakeError::Validation(_)
        )
    }

    /// Whether the caller may safely retry the identical request
    ///
    /// Allocation conflicts and persistence failures leave no partial state
    /// behind, so resubmitting the same input is always safe.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            IntakeError::AllocationConflict(_)
                | IntakeError::PersistenceFailure(_)
                | IntakeError::Database(_)
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        IntakeError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        IntakeError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for IntakeError {
    fn from(err: toml::de::Error) -> Self {
        IntakeError::Configuration(format!("TOML parse error: {err}"))
    }
}
