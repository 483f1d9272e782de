//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for missing required variables and override file failures.
//! - Classify errors for the composition root (missing configuration vs. anything else).
//!
//! Does NOT handle:
//! - Deciding whether an error is fatal (override file errors are logged and dropped by the loader).
//!
//! Invariants:
//! - Every variant names the variable or file it concerns.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingEnvVars(Vec<String>),

    /// Failed to parse an override file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error("Failed to parse {} at position {error_index}", .path.display())]
    DotenvParse { path: PathBuf, error_index: usize },

    /// Failed to read an override file due to an I/O error.
    #[error("Failed to read {}: {kind}", .path.display())]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load {}", .path.display())]
    DotenvUnknown { path: PathBuf },

    #[error("Unable to determine the working directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

impl ConfigError {
    /// Build the missing-variable error for a list of keys.
    ///
    /// A single key yields `MissingEnvVar` so the message reads naturally.
    pub fn missing(mut keys: Vec<String>) -> Self {
        if keys.len() == 1 {
            ConfigError::MissingEnvVar(keys.remove(0))
        } else {
            ConfigError::MissingEnvVars(keys)
        }
    }

    /// Names of the required variables this error reports, empty for other kinds.
    pub fn missing_keys(&self) -> Vec<&str> {
        match self {
            ConfigError::MissingEnvVar(key) => vec![key.as_str()],
            ConfigError::MissingEnvVars(keys) => keys.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Returns true if the error reports absent required configuration.
    pub fn is_missing_config(&self) -> bool {
        matches!(
            self,
            ConfigError::MissingEnvVar(_) | ConfigError::MissingEnvVars(_)
        )
    }
}
