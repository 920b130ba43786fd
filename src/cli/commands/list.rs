//! List commands implementation
//!
//! Read-only projections of the patient and profile sets, formatted as
//! tables. These exist so callers can see what data is available to
//! populate selection inputs.

use crate::adapters::database::{create_store, IntakeStore};
use crate::config::load_config;
use clap::Args;

/// Arguments for the patients command
#[derive(Args, Debug)]
pub struct PatientsArgs {
    /// Only show patients not yet picked up by downstream processing
    #[arg(long)]
    pub unprocessed: bool,
}

impl PatientsArgs {
    /// Execute the patients command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Listing patients");

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

        let patients = match store.list_patients().await {
            Ok(p) => p,
            Err(e) => {
                println!("❌ Failed to load patients");
                println!("   Error: {}", e);
                return Ok(5);
            }
        };

        let filtered: Vec<_> = patients
            .iter()
            .filter(|p| !self.unprocessed || !p.processed)
            .collect();

        if filtered.is_empty() {
            println!("No patients found.");
            println!("Run 'intake register' to register a patient.");
            return Ok(0);
        }

        println!("Found {} patient(s):", filtered.len());
        println!();
        println!(
            "{:<12} {:<20} {:<20} {:<12} {:<8} {:<12}",
            "Patient ID", "Last Name", "First Name", "Born", "Gender", "Processed"
        );
        println!("{}", "-".repeat(88));

        for patient in filtered {
            println!(
                "{:<12} {:<20} {:<20} {:<12} {:<8} {:<12}",
                patient.id.as_str(),
                patient.last_name,
                patient.first_name,
                patient.date_of_birth.format("%Y-%m-%d"),
                patient.gender.code(),
                if patient.processed { "✅" } else { "⏸️" }
            );
        }

        println!();
        Ok(0)
    }
}

/// Arguments for the profiles command
#[derive(Args, Debug)]
pub struct ProfilesArgs {}

impl ProfilesArgs {
    /// Execute the profiles command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Listing profiles");

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

        let profiles = match store.list_profiles().await {
            Ok(p) => p,
            Err(e) => {
                println!("❌ Failed to load profiles");
                println!("   Error: {}", e);
                return Ok(5);
            }
        };

        if profiles.is_empty() {
            println!("No profiles found.");
            return Ok(0);
        }

        println!("Found {} profile(s):", profiles.len());
        println!();
        println!("{:<8} {:<30} {:<8} {}", "ID", "Name", "Tests", "Test List");
        println!("{}", "-".repeat(80));

        for profile in profiles {
            let test_list = profile.test_list();
            println!(
                "{:<8} {:<30} {:<8} {}",
                profile.id,
                profile.name,
                test_list.len(),
                test_list.tokens().join(", ")
            );
        }

        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patients_args_defaults() {
        let args = PatientsArgs { unprocessed: false };
        assert!(!args.unprocessed);
    }
}
