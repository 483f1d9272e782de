//! Command implementations.
//!
//! Every command loads the layered environment exactly once through the
//! loader built from the global flags, then assembles `AppConfig` from it.

pub mod check;
pub mod connection_string;
pub mod show;

use anyhow::{Context, Result};
use appenv_config::{AppConfig, ConfigLoader, Environment};

/// Load the snapshot and assemble the configuration from it.
pub(crate) fn load(loader: &ConfigLoader) -> Result<(Environment, AppConfig)> {
    let env = loader.load_environment();
    let config = loader
        .assemble(&env)
        .context("Failed to build configuration")?;
    Ok((env, config))
}
