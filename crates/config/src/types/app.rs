//! Top-level application configuration.

use secrecy::SecretString;
use serde::Serialize;

use super::database::DatabaseConfig;
use crate::constants::{APP_PORT_VAR, DEFAULT_APP_PORT, JWT_SECRET_VAR};
use crate::loader::{ConfigError, Environment, RequiredVars};

/// Whether the deployment signs tokens and therefore needs `JWT_SECRET`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JwtSecretPolicy {
    /// `JWT_SECRET` must be set and non-empty.
    #[default]
    Required,
    /// `JWT_SECRET` is not read and `AppConfig::jwt_secret` is `None`.
    Disabled,
}

/// Configuration assembled once at startup.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    /// Listen port, kept verbatim.
    pub port: String,
    #[serde(serialize_with = "super::redacted::option::serialize")]
    pub jwt_secret: Option<SecretString>,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Read the application and database sections.
    ///
    /// Missing required keys of both sections are reported in a single error,
    /// application keys first.
    pub fn from_environment(env: &Environment, policy: JwtSecretPolicy) -> Result<Self, ConfigError> {
        let mut vars = RequiredVars::new(env);
        let port = vars.get(APP_PORT_VAR, DEFAULT_APP_PORT);
        let jwt_secret = match policy {
            JwtSecretPolicy::Required => Some(vars.require_secret(JWT_SECRET_VAR)),
            JwtSecretPolicy::Disabled => None,
        };
        let database = DatabaseConfig::resolve(&mut vars);

        vars.finish(Self {
            port,
            jwt_secret,
            database,
        })
    }
}
