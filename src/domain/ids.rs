//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for intake identifiers. Each type
//! ensures type safety and provides validation for format compliance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient identifier newtype wrapper
///
/// Represents a unique, location-prefixed patient identifier in the form
/// `<LocationPrefix><zero-padded sequence>`, e.g. `HERO001`. The prefix
/// determines the location namespace; within a namespace the numeric suffix
/// is an increasing sequence.
///
/// # Examples
///
/// ```
/// use intake::domain::ids::PatientId;
/// use std::str::FromStr;
///
/// let patient_id = PatientId::from_str("HERO001").unwrap();
/// assert_eq!(patient_id.as_str(), "HERO001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientId(String);

impl PatientId {
    /// Creates a new PatientId from a string
    ///
    /// # Arguments
    ///
    /// * `id` - The patient identifier string
    ///
    /// # Returns
    ///
    /// Returns `Ok(PatientId)` if the ID is valid, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Patient ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the patient ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the numeric suffix after the given location prefix, if this
    /// identifier belongs to that namespace
    pub fn suffix_for(&self, prefix: &str) -> Option<&str> {
        self.0.strip_prefix(prefix)
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Profile identifier newtype wrapper
///
/// Represents the integer key of a predefined test profile.
///
/// # Examples
///
/// ```
/// use intake::domain::ids::ProfileId;
/// use std::str::FromStr;
///
/// let profile_id = ProfileId::from_str("12").unwrap();
/// assert_eq!(profile_id.value(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(i32);

impl ProfileId {
    /// Creates a new ProfileId from an integer key
    ///
    /// # Returns
    ///
    /// Returns `Ok(ProfileId)` if the key is non-negative, `Err` otherwise
    pub fn new(id: i32) -> Result<Self, String> {
        if id < 0 {
            return Err(format!("Profile ID cannot be negative: {id}"));
        }
        Ok(Self(id))
    }

    /// Returns the inner integer key
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProfileId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: i32 = s
            .trim()
            .parse()
            .map_err(|_| format!("Profile ID must be an integer, got: {s}"))?;
        Self::new(id)
    }
}
