//! CLI command implementations
//!
//! Each command parses its own arguments, loads configuration, and returns
//! a process exit code: 0 success, 2 configuration error, 3 validation
//! error (fix your input), 4 connection error, 5 fatal. Distinct codes let
//! callers tell "fix your input" from "try again".

pub mod init;
pub mod list;
pub mod order;
pub mod register;
pub mod validate;

use crate::domain::IntakeError;

/// Maps a domain error onto the command exit-code scheme
pub fn exit_code_for(error: &IntakeError) -> i32 {
    match error {
        IntakeError::Configuration(_) => 2,
        e if e.is_validation() => 3,
        IntakeError::Database(_) => 4,
        _ => 5,
    }
}
