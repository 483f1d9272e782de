//! `appenv show`: print the resolved configuration and where each value came from.
//!
//! Invariants:
//! - Secret values are never printed; both formats use the redacted forms.
//! - Keys that fell back to a built-in default report the source `default`.
//! - `APP_ENV` is the value that selected the environment-specific files, not whatever
//!   those files later assign; it is omitted when no layering took place.

use anyhow::Result;
use appenv_config::constants::{
    APP_ENV_VAR, APP_PORT_VAR, DB_HOST_VAR, DB_NAME_VAR, DB_PASSWORD_VAR, DB_PORT_VAR,
    DB_SCHEMA_VAR, DB_SSL_MODE_VAR, DB_USER_VAR, JWT_SECRET_VAR, REDACTED,
};
use appenv_config::{AppConfig, ConfigLoader, Environment};
use serde_json::{Map, Value, json};

use crate::args::OutputFormat;

/// Keys reported by `show`, in display order.
const KEYS: [&str; 10] = [
    APP_ENV_VAR,
    APP_PORT_VAR,
    JWT_SECRET_VAR,
    DB_HOST_VAR,
    DB_PORT_VAR,
    DB_USER_VAR,
    DB_PASSWORD_VAR,
    DB_NAME_VAR,
    DB_SCHEMA_VAR,
    DB_SSL_MODE_VAR,
];

pub fn run(loader: &ConfigLoader, format: OutputFormat) -> Result<()> {
    let (env, config) = super::load(loader)?;
    let output = match format {
        OutputFormat::Text => render_text(&env, &config),
        OutputFormat::Json => serde_json::to_string_pretty(&render_json(&env, &config)?)?,
    };
    println!("{output}");
    Ok(())
}

fn source(env: &Environment, key: &str) -> Option<String> {
    let source = match key {
        APP_ENV_VAR => env.app_env_source(),
        _ => env.source_of(key),
    };
    source.map(ToString::to_string)
}

/// Display value for a key; `None` when the key is not part of the record.
fn value(env: &Environment, config: &AppConfig, key: &str) -> Option<String> {
    let db = &config.database;
    let value = match key {
        APP_ENV_VAR => env.app_env()?.to_string(),
        APP_PORT_VAR => config.port.clone(),
        JWT_SECRET_VAR => config.jwt_secret.as_ref().map(|_| REDACTED.to_string())?,
        DB_HOST_VAR => db.host.clone(),
        DB_PORT_VAR => db.port.clone(),
        DB_USER_VAR => db.user.clone(),
        DB_PASSWORD_VAR => REDACTED.to_string(),
        DB_NAME_VAR => db.name.clone(),
        DB_SCHEMA_VAR => db.schema.clone(),
        DB_SSL_MODE_VAR => db.ssl_mode.clone(),
        _ => return None,
    };
    Some(value)
}

fn render_text(env: &Environment, config: &AppConfig) -> String {
    let mut lines: Vec<String> = KEYS
        .iter()
        .filter_map(|key| {
            let value = value(env, config, key)?;
            let source = source(env, key).unwrap_or_else(|| "default".to_string());
            Some(format!("{key:<12} {value:<24} {source}"))
        })
        .collect();
    lines.push(String::new());
    lines.push(config.database.to_string());
    lines.join("\n")
}

fn render_json(env: &Environment, config: &AppConfig) -> Result<Value> {
    let sources: Map<String, Value> = KEYS
        .iter()
        .filter(|key| value(env, config, key).is_some())
        .map(|key| (key.to_string(), source(env, key).map_or(Value::Null, Value::String)))
        .collect();

    Ok(json!({
        "app_env": env.app_env(),
        "config": serde_json::to_value(config)?,
        "sources": sources,
    }))
}
