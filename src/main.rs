// Intake - Clinical Intake Service
// Copyright (c) 2025 Intake Contributors
// Licensed under the MIT License

use clap::Parser;
use intake::cli::{Cli, Commands};
use intake::config::LoggingConfig;
use intake::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging with console-only config (no file logging for CLI)
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let logging_config = LoggingConfig {
        local_enabled: false,
        local_path: String::new(),
        local_rotation: "daily".to_string(),
    };
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Intake - Clinical Intake Service"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Register(args) => args.execute(&cli.config).await,
        Commands::Order(args) => args.execute(&cli.config).await,
        Commands::Patients(args) => args.execute(&cli.config).await,
        Commands::Profiles(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
