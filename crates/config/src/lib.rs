//! Configuration management for appenv services.
//!
//! This crate loads `.env` override files and the process environment into a
//! layered snapshot and assembles the application and database configuration
//! records from it.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, EnvLayer, Environment, LayerSource, RequiredVars, load_app_config,
    load_database_config,
};
pub use types::{AppConfig, DatabaseConfig, JwtSecretPolicy};
