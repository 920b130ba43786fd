//! Register command implementation
//!
//! Registers a new patient at a care location, allocating the next
//! location-prefixed identifier.

use crate::adapters::database::create_store;
use crate::cli::commands::exit_code_for;
use crate::config::load_config;
use crate::core::allocation::PatientIdentifierAllocator;
use crate::core::registration::Registrar;
use crate::domain::locations::LocationPrefixMap;
use crate::domain::patient::{Gender, NewPatient};
use chrono::NaiveDate;
use clap::Args;

/// Arguments for the register command
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Family name
    #[arg(long)]
    pub last_name: String,

    /// Given name
    #[arg(long)]
    pub first_name: String,

    /// Middle name
    #[arg(long)]
    pub middle_name: Option<String>,

    /// Title (Mr, Ms, Dr, ...)
    #[arg(long)]
    pub title: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub date_of_birth: NaiveDate,

    /// Gender (Male, Female; anything else records as unknown)
    #[arg(long)]
    pub gender: String,

    /// Address line 1
    #[arg(long)]
    pub address1: Option<String>,

    /// Address line 2
    #[arg(long)]
    pub address2: Option<String>,

    /// City
    #[arg(long)]
    pub city: Option<String>,

    /// State or county
    #[arg(long)]
    pub state: Option<String>,

    /// Postal code
    #[arg(long)]
    pub post_code: Option<String>,

    /// Country
    #[arg(long)]
    pub country: Option<String>,

    /// Contact phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Care location name (must be present in the configured location table)
    #[arg(long)]
    pub location: String,
}

impl RegisterArgs {
    /// Execute the register command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(location = %self.location, "Registering patient");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {}", e);
                return Ok(2);
            }
        };

        let store = match create_store(&config).await {
            Ok(s) => s,
            Err(e) => {
                println!("❌ Failed to connect to database");
                println!("   Error: {}", e);
                return Ok(4);
            }
        };

        let locations = match LocationPrefixMap::new(config.locations.clone()) {
            Ok(l) => l,
            Err(e) => {
                println!("❌ Invalid location table");
                println!("   Error: {}", e);
                return Ok(2);
            }
        };

        let request = self.to_request();
        let allocator = PatientIdentifierAllocator::new(store.clone(), locations);
        let registrar = Registrar::new(
            allocator,
            store,
            config.allocation.max_attempts,
            config.application.dry_run,
        );

        match registrar.register(request).await {
            Ok(patient_id) => {
                if config.application.dry_run {
                    println!("✅ DRY RUN: would register patient as {}", patient_id);
                } else {
                    println!("✅ Patient registered: {}", patient_id);
                }
                Ok(0)
            }
            Err(e) => {
                println!("❌ Registration failed");
                println!("   Error: {}", e);
                if e.is_retryable() {
                    println!("   The request may be retried as-is.");
                }
                Ok(exit_code_for(&e))
            }
        }
    }

    /// Builds the registration request from the parsed arguments
    fn to_request(&self) -> NewPatient {
        let mut builder = NewPatient::builder()
            .last_name(&self.last_name)
            .first_name(&self.first_name)
            .date_of_birth(self.date_of_birth)
            .gender(Gender::from_raw(&self.gender))
            .location(&self.location);

        if let Some(ref middle_name) = self.middle_name {
            builder = builder.middle_name(middle_name);
        }
        if let Some(ref title) = self.title {
            builder = builder.title(title);
        }
        if let Some(ref address1) = self.address1 {
            builder = builder.address1(address1);
        }
        if let Some(ref address2) = self.address2 {
            builder = builder.address2(address2);
        }
        if let Some(ref city) = self.city {
            builder = builder.address_city(city);
        }
        if let Some(ref state) = self.state {
            builder = builder.address_state(state);
        }
        if let Some(ref post_code) = self.post_code {
            builder = builder.address_post_code(post_code);
        }
        if let Some(ref country) = self.country {
            builder = builder.address_country(country);
        }
        if let Some(ref phone) = self.phone {
            builder = builder.phone_number(phone);
        }

        // Every required field is set above, so build cannot fail.
        builder.build().expect("all required fields set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> RegisterArgs {
        RegisterArgs {
            last_name: "Kent".to_string(),
            first_name: "Clark".to_string(),
            middle_name: None,
            title: Some("Mr".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1978, 6, 18).unwrap(),
            gender: "Male".to_string(),
            address1: None,
            address2: None,
            city: Some("Metropolis".to_string()),
            state: None,
            post_code: None,
            country: None,
            phone: None,
            location: "Superhero".to_string(),
        }
    }

    #[test]
    fn test_to_request_maps_fields() {
        let request = args().to_request();
        assert_eq!(request.last_name, "Kent");
        assert_eq!(request.gender, Gender::Male);
        assert_eq!(request.address_city.as_deref(), Some("Metropolis"));
        assert_eq!(request.location, "Superhero");
    }

    #[test]
    fn test_to_request_unrecognized_gender_defaults() {
        let mut a = args();
        a.gender = "unspecified".to_string();
        assert_eq!(a.to_request().gender, Gender::Unknown);
    }
}
