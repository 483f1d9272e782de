//! `appenv connection-string`: print the raw libpq connection string.

use anyhow::Result;
use appenv_config::ConfigLoader;

pub fn run(loader: &ConfigLoader) -> Result<()> {
    let (_env, config) = super::load(loader)?;
    println!("{}", config.database.connection_string());
    Ok(())
}
