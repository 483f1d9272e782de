//! Configuration loader for override files and environment variables.
//!
//! Responsibilities:
//! - Parse `.env` override files and stack them with the process environment.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration loading.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Field-level defaults and record shapes (see `types`).
//!
//! Invariants / Assumptions:
//! - Environment-specific files take precedence over the process environment,
//!   which takes precedence over base `.env` files.
//! - Loading produces an owned `Environment`; the process environment is only read.

mod builder;
mod dotenv;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, load_app_config, load_database_config};
pub use env::{EnvLayer, Environment, LayerSource, RequiredVars};
pub use error::ConfigError;
