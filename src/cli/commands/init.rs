//! Init command implementation
//!
//! Generates a starter configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "intake.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing intake configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set INTAKE_DATABASE_URL in your environment or .env file");
                println!("  3. Adjust the [locations] table to your care locations");
                println!("  4. Validate configuration: intake validate-config");
                println!("  5. Register a patient: intake register --help");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Generate the starter configuration
    fn generate_config() -> String {
        r#"# Intake Configuration File
# Clinical intake service for patient registration and lab order submission

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (don't write to the datastore)
dry_run = false

[database]
# Connection string format: postgresql://[user[:password]@][host][:port][/dbname]
connection_string = "${INTAKE_DATABASE_URL}"

# Connection pool settings
max_connections = 10                # Maximum connections in pool (1-100)
connection_timeout_seconds = 30     # Timeout for acquiring a connection
statement_timeout_seconds = 60      # Timeout for SQL statement execution

[allocation]
# Bounded retries when a concurrent registration claims the same identifier
max_attempts = 5

# Care-location name -> identifier prefix. The table is closed: registering
# at a location missing from it is rejected. Prefixes must be alphabetic
# and no prefix may be a leading substring of another.
[locations]
"Superhero" = "HERO"
"Test" = "DOOTEST"
"Real Life" = "LIFE"

[logging]
# Enable local JSON file logging
local_enabled = false

# Local log file directory
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "intake.toml".to_string(),
            force: false,
        };

        assert_eq!(args.output, "intake.toml");
        assert!(!args.force);
    }

    #[test]
    fn test_generate_config_sections() {
        let config = InitArgs::generate_config();
        assert!(config.contains("[application]"));
        assert!(config.contains("[database]"));
        assert!(config.contains("[allocation]"));
        assert!(config.contains("[locations]"));
        assert!(config.contains("\"Superhero\" = \"HERO\""));
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intake.toml");
        fs::write(&path, "existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };

        let code = args.execute().await.unwrap();
        assert_eq!(code, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing");
    }
}
