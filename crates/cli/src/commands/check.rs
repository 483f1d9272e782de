//! `appenv check`: fail fast on misconfiguration.

use anyhow::Result;
use appenv_config::ConfigLoader;

pub fn run(loader: &ConfigLoader) -> Result<()> {
    let (_env, config) = super::load(loader)?;
    tracing::info!(port = %config.port, "configuration is complete");
    println!("ok");
    println!("{}", config.database);
    Ok(())
}
