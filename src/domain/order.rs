//! Order domain model
//!
//! One inbound submission expands into one persisted row per requested test.
//! All rows of a submission share the patient, profile, urgency, and comment,
//! and are written all-or-nothing.

use super::ids::{PatientId, ProfileId};
use super::profile::TestList;
use serde::{Deserialize, Serialize};

/// An inbound order submission
///
/// References an existing patient and profile by identifier; both are
/// validated against the datastore before any row is written.
#[derive(Debug, Clone)]
pub struct OrderSubmission {
    /// Patient the tests are requested for
    pub patient_id: PatientId,

    /// Profile whose test list is expanded
    pub profile_id: ProfileId,

    /// Urgency flag shared by every expanded row
    pub urgent: bool,

    /// Free-text comment shared by every expanded row
    pub comments: Option<String>,
}

impl OrderSubmission {
    /// Creates a submission request
    pub fn new(
        patient_id: PatientId,
        profile_id: ProfileId,
        urgent: bool,
        comments: Option<String>,
    ) -> Self {
        Self {
            patient_id,
            profile_id,
            urgent,
            comments,
        }
    }

    /// Expands this submission into one order row per surviving test token
    ///
    /// Every row carries the same patient, profile, urgency, and comment;
    /// `processed` starts false on each.
    pub fn expand(&self, tests: &TestList) -> Vec<OrderRow> {
        tests
            .tokens()
            .iter()
            .map(|test| OrderRow {
                patient_id: self.patient_id.clone(),
                requested_profile: self.profile_id,
                requested_test: test.clone(),
                urgent: self.urgent,
                comments: self.comments.clone(),
                processed: false,
            })
            .collect()
    }
}

/// One persisted record representing a single requested test
///
/// Identified by its composite content rather than a generated key; the
/// caller never receives row identifiers back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    /// Patient identifier the row belongs to
    pub patient_id: PatientId,

    /// Profile the submission requested
    pub requested_profile: ProfileId,

    /// Single trimmed test token
    pub requested_test: String,

    /// Urgency flag
    pub urgent: bool,

    /// Free-text comment
    pub comments: Option<String>,

    /// Downstream processing marker, false at creation
    pub processed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> OrderSubmission {
        OrderSubmission::new(
            PatientId::new("HERO001").unwrap(),
            ProfileId::new(4).unwrap(),
            true,
            Some("fasting sample".to_string()),
        )
    }

    #[test]
    fn test_expand_one_row_per_token() {
        let rows = submission().expand(&TestList::parse("CBC, LFT, U&E"));
        assert_eq!(rows.len(), 3);
        let tests: Vec<&str> = rows.iter().map(|r| r.requested_test.as_str()).collect();
        assert_eq!(tests, ["CBC", "LFT", "U&E"]);
    }

    #[test]
    fn test_expand_rows_share_submission_fields() {
        let rows = submission().expand(&TestList::parse("CBC,LFT"));
        for row in &rows {
            assert_eq!(row.patient_id.as_str(), "HERO001");
            assert_eq!(row.requested_profile.value(), 4);
            assert!(row.urgent);
            assert_eq!(row.comments.as_deref(), Some("fasting sample"));
            assert!(!row.processed);
        }
    }

    #[test]
    fn test_expand_empty_list_yields_no_rows() {
        let rows = submission().expand(&TestList::parse(" , "));
        assert!(rows.is_empty());
    }
}
