//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the intake service
//! using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Intake - Clinical Intake Service
#[derive(Parser, Debug)]
#[command(name = "intake")]
#[command(version, about, long_about = None)]
#[command(author = "Intake Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "intake.toml", env = "INTAKE_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "INTAKE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new patient at a care location
    Register(commands::register::RegisterArgs),

    /// Submit a lab order for an existing patient
    Order(commands::order::OrderArgs),

    /// List registered patients
    Patients(commands::list::PatientsArgs),

    /// List available test profiles
    Profiles(commands::list::ProfilesArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
