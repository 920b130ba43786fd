//! Order command implementation
//!
//! Submits a multi-test lab order for an existing patient against a
//! predefined profile.

use crate::adapters::database::create_store;
use crate::cli::commands::exit_code_for;
use crate::config::load_config;
use crate::core::orders::OrderSubmissionTransaction;
use crate::domain::ids::{PatientId, ProfileId};
use crate::domain::order::OrderSubmission;
use clap::Args;

/// Arguments for the order command
#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Patient identifier (e.g. HERO001)
    #[arg(long)]
    pub patient_id: String,

    /// Profile key to expand into per-test order rows
    #[arg(long)]
    pub profile_id: String,

    /// Mark every test in the order as urgent
    #[arg(long)]
    pub urgent: bool,

    /// Free-text comment attached to every test row
    #[arg(long)]
    pub comments: Option<String>,
}

impl OrderArgs {
    /// Execute the order command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(
            patient_id = %self.patient_id,
            profile_id = %self.profile_id,
            "Submitting order"
        );

        let patient_id = match self.patient_id.parse::<PatientId>() {
            Ok(id) => id,
            Err(e) => {
                println!("❌ Invalid patient identifier: {}", e);
                return Ok(3);
            }
        };

        let profile_id = match self.profile_id.parse::<ProfileId>() {
            Ok(id) => id,
            Err(e) => {
                println!("❌ Invalid profile identifier: {}", e);
                return Ok(3);
            }
        };

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

        let submission = OrderSubmission::new(
            patient_id,
            profile_id,
            self.urgent,
            self.comments.clone(),
        );

        let transaction = OrderSubmissionTransaction::new(store, config.application.dry_run);

        match transaction.submit(submission).await {
            Ok(receipt) => {
                if config.application.dry_run {
                    println!(
                        "✅ DRY RUN: would submit order with {} test(s)",
                        receipt.rows_written
                    );
                } else {
                    println!("✅ Order submitted: {} test(s)", receipt.rows_written);
                }
                Ok(0)
            }
            Err(e) => {
                println!("❌ Order submission failed");
                println!("   Error: {}", e);
                if e.is_retryable() {
                    println!("   No rows were written; the submission may be retried as-is.");
                }
                Ok(exit_code_for(&e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_args_fields() {
        let args = OrderArgs {
            patient_id: "HERO001".to_string(),
            profile_id: "3".to_string(),
            urgent: true,
            comments: Some("fasting sample".to_string()),
        };

        assert_eq!(args.patient_id, "HERO001");
        assert_eq!(args.profile_id, "3");
        assert!(args.urgent);
        assert_eq!(args.comments.as_deref(), Some("fasting sample"));
    }
}
