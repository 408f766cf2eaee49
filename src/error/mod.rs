//! Error types and handling for bfprofile
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`catalog`]: Option catalog and token errors
//! - [`profile`]: Profile validation and mutation errors
//! - [`fs`]: File system errors
//! - [`stage`]: Errors reported by the external build stages

pub mod catalog;
pub mod fs;
pub mod profile;
pub mod stage;

#[allow(unused_imports)]
pub use catalog::{
    invalid as catalog_invalid, unknown_option, unknown_token, value_mismatch,
};
#[allow(unused_imports)]
pub use fs::{read_failed as file_read_failed, write_failed as file_write_failed};
#[allow(unused_imports)]
pub use profile::{gating, validation, yaml_syntax};
#[allow(unused_imports)]
pub use stage::failed as stage_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for profile resolution
#[derive(Error, Diagnostic, Debug)]
pub enum ProfileError {
    // Catalog errors
    #[error("Unknown option: {name}")]
    #[diagnostic(
        code(bfprofile::catalog::unknown_option),
        help("Run 'bfprofile options' to list the known options")
    )]
    UnknownOption { name: String },

    #[error("Invalid option token '{token}': {reason}")]
    #[diagnostic(
        code(bfprofile::catalog::unknown_token),
        help("Tokens are written as 'option' to enable or '^option' to disable")
    )]
    UnknownToken { token: String, reason: String },

    #[error("Option {name} expects a {expected} value")]
    #[diagnostic(code(bfprofile::catalog::value_mismatch))]
    OptionValueMismatch { name: String, expected: String },

    #[error("Invalid option catalog: {message}")]
    #[diagnostic(code(bfprofile::catalog::invalid))]
    CatalogInvalid { message: String },

    // Profile errors
    #[error("Invalid profile at {path}: {message}")]
    #[diagnostic(code(bfprofile::profile::validation))]
    Validation { path: String, message: String },

    #[error("Invalid profile YAML at line {line}, column {column}: {message}")]
    #[diagnostic(code(bfprofile::profile::yaml_syntax))]
    YamlSyntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Option {name} requires {parent} to be ON")]
    #[diagnostic(
        code(bfprofile::profile::gating),
        help("Enable the parent feature before setting its sub-options")
    )]
    Gating { name: String, parent: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(bfprofile::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(bfprofile::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(bfprofile::fs::io_error))]
    IoError { message: String },

    // Stage errors
    #[error("Stage '{stage}' failed: {reason}")]
    #[diagnostic(
        code(bfprofile::stage::failed),
        help("Re-run with --dry-run to see the exact command")
    )]
    StageFailed { stage: String, reason: String },

    // CLI errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(bfprofile::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },
}

impl From<std::io::Error> for ProfileError {
    fn from(err: std::io::Error) -> Self {
        ProfileError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ProfileError {
    fn from(err: serde_yaml::Error) -> Self {
        match err.location() {
            Some(location) => ProfileError::YamlSyntax {
                line: location.line(),
                column: location.column(),
                message: err.to_string(),
            },
            None => ProfileError::Validation {
                path: "/".to_string(),
                message: err.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        ProfileError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ProfileError>;
