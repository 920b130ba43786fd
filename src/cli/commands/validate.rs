//! Validate-config command implementation
//!
//! Loads and validates the configuration file without touching the
//! datastore.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config = %config_path, "Validating configuration");

        println!("🔍 Validating configuration: {}", config_path);
        println!();

        match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                println!("   Log level:       {}", config.application.log_level);
                println!("   Dry run:         {}", config.application.dry_run);
                println!("   Pool size:       {}", config.database.max_connections);
                println!("   Alloc attempts:  {}", config.allocation.max_attempts);
                println!("   Locations:");
                for (location, prefix) in &config.locations {
                    println!("     {:<20} -> {}", location, prefix);
                }
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {}", e);
                println!();
                Ok(2)
            }
        }
    }
}
