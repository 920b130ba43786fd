//! Patient domain model
//!
//! This module defines the Patient demographic record, the inbound
//! registration request, and the fixed gender-code mapping.

use super::ids::PatientId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender code persisted on a patient row
///
/// Raw form input is mapped onto a fixed single-letter code set. Recognized
/// values map exactly; anything unrecognized maps to [`Gender::Unknown`]
/// rather than failing the registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Code `M`
    Male,
    /// Code `F`
    Female,
    /// Code `U` - default for unrecognized input
    Unknown,
}

impl Gender {
    /// Maps a raw inbound gender value onto the fixed code set
    ///
    /// Recognition is exact-match: `"Male"` and `"Female"` map to their
    /// codes; every other value (including `"Other"`) maps to `Unknown`.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            _ => Gender::Unknown,
        }
    }

    /// Single-letter code as persisted in the datastore
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unknown => "U",
        }
    }

    /// Reconstructs a gender from its persisted single-letter code
    ///
    /// Unknown codes collapse to `Unknown`, mirroring `from_raw`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "M" => Gender::Male,
            "F" => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

/// A persisted patient demographic record
///
/// The identifier is allocated once at registration and never renumbered.
/// The `processed` flag defaults to false and is toggled later by an
/// external downstream process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Allocated location-prefixed identifier
    pub id: PatientId,

    /// Family name
    pub last_name: String,

    /// Given name
    pub first_name: String,

    /// Middle name, if any
    pub middle_name: Option<String>,

    /// Title (Mr, Ms, Dr, ...)
    pub title: Option<String>,

    /// Date of birth
    pub date_of_birth: NaiveDate,

    /// Fixed gender code
    pub gender: Gender,

    /// Address line 1
    pub address1: Option<String>,

    /// Address line 2
    pub address2: Option<String>,

    /// City
    pub address_city: Option<String>,

    /// State or county
    pub address_state: Option<String>,

    /// Postal code
    pub address_post_code: Option<String>,

    /// Country
    pub address_country: Option<String>,

    /// Contact phone number
    pub phone_number: Option<String>,

    /// Downstream processing marker, false at registration
    pub processed: bool,
}

/// An inbound patient registration request
///
/// Carries the demographic fields plus the care-location name; the location
/// resolves to an identifier prefix during registration. No identifier is
/// present yet - allocation happens inside the registration flow.
#[derive(Debug, Clone)]
pub struct NewPatient {
    /// Family name
    pub last_name: String,

    /// Given name
    pub first_name: String,

    /// Middle name, if any
    pub middle_name: Option<String>,

    /// Title (Mr, Ms, Dr, ...)
    pub title: Option<String>,

    /// Date of birth
    pub date_of_birth: NaiveDate,

    /// Mapped gender code
    pub gender: Gender,

    /// Address line 1
    pub address1: Option<String>,

    /// Address line 2
    pub address2: Option<String>,

    /// City
    pub address_city: Option<String>,

    /// State or county
    pub address_state: Option<String>,

    /// Postal code
    pub address_post_code: Option<String>,

    /// Country
    pub address_country: Option<String>,

    /// Contact phone number
    pub phone_number: Option<String>,

    /// Care location name, resolved through the location prefix map
    pub location: String,
}

impl NewPatient {
    /// Creates a new builder for constructing a registration request
    pub fn builder() -> NewPatientBuilder {
        NewPatientBuilder::default()
    }

    /// Assembles the persisted patient row once an identifier is allocated
    ///
    /// The row starts with `processed = false`; only the out-of-scope
    /// downstream process toggles it.
    pub fn into_patient(self, id: PatientId) -> Patient {
        Patient {
            id,
            last_name: self.last_name,
            first_name: self.first_name,
            middle_name: self.middle_name,
            title: self.title,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            address1: self.address1,
            address2: self.address2,
            address_city: self.address_city,
            address_state: self.address_state,
            address_post_code: self.address_post_code,
            address_country: self.address_country,
            phone_number: self.phone_number,
            processed: false,
        }
    }
}

/// Builder for constructing NewPatient registration requests
#[derive(Debug, Default)]
pub struct NewPatientBuilder {
    last_name: Option<String>,
    first_name: Option<String>,
    middle_name: Option<String>,
    title: Option<String>,
    date_of_birth: Option<NaiveDate>,
    gender: Option<Gender>,
    address1: Option<String>,
    address2: Option<String>,
    address_city: Option<String>,
    address_state: Option<String>,
    address_post_code: Option<String>,
    address_country: Option<String>,
    phone_number: Option<String>,
    location: Option<String>,
}

impl NewPatientBuilder {
    /// Creates a new NewPatientBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the family name
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Sets the given name
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Sets the middle name
    pub fn middle_name(mut self, middle_name: impl Into<String>) -> Self {
        self.middle_name = Some(middle_name.into());
        self
    }

    /// Sets the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the date of birth
    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    /// Sets the gender code
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Sets address line 1
    pub fn address1(mut self, address1: impl Into<String>) -> Self {
        self.address1 = Some(address1.into());
        self
    }

    /// Sets address line 2
    pub fn address2(mut self, address2: impl Into<String>) -> Self {
        self.address2 = Some(address2.into());
        self
    }

    /// Sets the city
    pub fn address_city(mut self, city: impl Into<String>) -> Self {
        self.address_city = Some(city.into());
        self
    }

    /// Sets the state or county
    pub fn address_state(mut self, state: impl Into<String>) -> Self {
        self.address_state = Some(state.into());
        self
    }

    /// Sets the postal code
    pub fn address_post_code(mut self, post_code: impl Into<String>) -> Self {
        self.address_post_code = Some(post_code.into());
        self
    }

    /// Sets the country
    pub fn address_country(mut self, country: impl Into<String>) -> Self {
        self.address_country = Some(country.into());
        self
    }

    /// Sets the phone number
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Sets the care location name
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builds the NewPatient
    ///
    /// # Errors
    ///
    /// Returns an error if any required field is missing
    pub fn build(self) -> Result<NewPatient, String> {
        Ok(NewPatient {
            last_name: self.last_name.ok_or("last_name is required")?,
            first_name: self.first_name.ok_or("first_name is required")?,
            middle_name: self.middle_name,
            title: self.title,
            date_of_birth: self.date_of_birth.ok_or("date_of_birth is required")?,
            gender: self.gender.ok_or("gender is required")?,
            address1: self.address1,
            address2: self.address2,
            address_city: self.address_city,
            address_state: self.address_state,
            address_post_code: self.address_post_code,
            address_country: self.address_country,
            phone_number: self.phone_number,
            location: self.location.ok_or("location is required")?,
        })
    }
}
