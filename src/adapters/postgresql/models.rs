//! PostgreSQL row models
//!
//! Row-to-domain mapping for the `patients`, `profiles`, and `orders`
//! tables. Kept separate from the adapter so column layout changes stay in
//! one place.

use crate::domain::ids::{PatientId, ProfileId};
use crate::domain::patient::{Gender, Patient};
use crate::domain::profile::Profile;
use crate::domain::{IntakeError, Result};
use chrono::NaiveDate;
use tokio_postgres::Row;

/// Column list for patient projections, matching [`patient_from_row`]
pub const PATIENT_COLUMNS: &str = "patient_id, last_name, first_name, middle_name, title, \
     date_of_birth, gender, address1, address2, address_city, address_state, \
     address_post_code, address_country, phone_number, processed";

/// Maps a `patients` row onto the domain model
///
/// # Errors
///
/// Returns a validation error if the stored identifier is malformed.
pub fn patient_from_row(row: &Row) -> Result<Patient> {
    let id: String = row.get("patient_id");
    let id = PatientId::new(id).map_err(IntakeError::Validation)?;
    let gender: String = row.get("gender");
    let date_of_birth: NaiveDate = row.get("date_of_birth");

    Ok(Patient {
        id,
        last_name: row.get("last_name"),
        first_name: row.get("first_name"),
        middle_name: row.get("middle_name"),
        title: row.get("title"),
        date_of_birth,
        gender: Gender::from_code(&gender),
        address1: row.get("address1"),
        address2: row.get("address2"),
        address_city: row.get("address_city"),
        address_state: row.get("address_state"),
        address_post_code: row.get("address_post_code"),
        address_country: row.get("address_country"),
        phone_number: row.get("phone_number"),
        processed: row.get("processed"),
    })
}

/// Maps a `profiles` row onto the domain model
///
/// # Errors
///
/// Returns a validation error if the stored key is malformed.
pub fn profile_from_row(row: &Row) -> Result<Profile> {
    let id: i32 = row.get("id");
    let id = ProfileId::new(id).map_err(IntakeError::Validation)?;

    Ok(Profile {
        id,
        name: row.get("profile_name"),
        tests: row.get("tests"),
    })
}
