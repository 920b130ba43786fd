//! Profile domain model and test-list parsing
//!
//! A profile is a named, reusable set of lab test tokens stored as a single
//! comma-delimited field. Parsing that field is a value-object concern kept
//! separate from persistence so a format change never ripples into the
//! transaction logic.

use super::ids::ProfileId;
use serde::{Deserialize, Serialize};

/// Delimiter between test tokens in the stored test-list field
const TEST_LIST_DELIMITER: char = ',';

/// A predefined, read-only lab test profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Profile key
    pub id: ProfileId,

    /// Display name shown in selection inputs
    pub name: String,

    /// Ordered comma-delimited test tokens, stored verbatim
    pub tests: String,
}

impl Profile {
    /// Parses the stored test-list field into its surviving tokens
    pub fn test_list(&self) -> TestList {
        TestList::parse(&self.tests)
    }
}

/// Parsed test list of a profile
///
/// All handling of the delimited format lives here. The surviving sequence
/// preserves the stored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestList(Vec<String>);

impl TestList {
    /// Parses a delimited test-list field
    ///
    /// Splits on the delimiter, trims surrounding whitespace from each
    /// token, and discards tokens that are empty after trimming.
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .split(TEST_LIST_DELIMITER)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        Self(tokens)
    }

    /// The surviving tokens in stored order
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Number of surviving tokens
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no token survived parsing
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
