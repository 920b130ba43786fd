//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::IntakeConfig;
use crate::config::secret_string;
use crate::domain::errors::IntakeError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into IntakeConfig
/// 4. Applies environment variable overrides (INTAKE_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use intake::config::load_config;
///
/// let config = load_config("intake.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<IntakeConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(IntakeError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        IntakeError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: IntakeConfig = toml::from_str(&contents)
        .map_err(|e| IntakeError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        IntakeError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(IntakeError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the INTAKE_* prefix
///
/// Environment variables follow the pattern: INTAKE_<SECTION>_<KEY>
/// For example: INTAKE_DATABASE_CONNECTION_STRING, INTAKE_APPLICATION_DRY_RUN
fn apply_env_overrides(config: &mut IntakeConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("INTAKE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("INTAKE_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Database overrides
    if let Ok(val) = std::env::var("INTAKE_DATABASE_CONNECTION_STRING") {
        config.database.connection_string = secret_string(val);
    }
    if let Ok(val) = std::env::var("INTAKE_DATABASE_MAX_CONNECTIONS") {
        if let Ok(size) = val.parse() {
            config.database.max_connections = size;
        }
    }
    if let Ok(val) = std::env::var("INTAKE_DATABASE_STATEMENT_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.database.statement_timeout_seconds = timeout;
        }
    }

    // Allocation overrides
    if let Ok(val) = std::env::var("INTAKE_ALLOCATION_MAX_ATTEMPTS") {
        if let Ok(attempts) = val.parse() {
            config.allocation.max_attempts = attempts;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("INTAKE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("INTAKE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
