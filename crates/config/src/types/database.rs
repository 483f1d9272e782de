//! Database connection settings.
//!
//! Invariants:
//! - `user`, `password` and `name` are non-empty in any value returned by `from_environment`.
//! - `port` stays a string; no numeric coercion happens here.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::fmt;

use crate::constants::{
    DB_HOST_VAR, DB_NAME_VAR, DB_PASSWORD_VAR, DB_PORT_VAR, DB_SCHEMA_VAR, DB_SSL_MODE_VAR,
    DB_USER_VAR, DEFAULT_DB_HOST, DEFAULT_DB_PORT, DEFAULT_DB_SCHEMA, DEFAULT_DB_SSL_MODE,
    REDACTED,
};
use crate::loader::{ConfigError, Environment, RequiredVars};

/// PostgreSQL connection settings.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    #[serde(serialize_with = "super::redacted::serialize")]
    pub password: SecretString,
    pub name: String,
    pub schema: String,
    pub ssl_mode: String,
}

impl DatabaseConfig {
    /// Read the database section, reporting every missing required key at once.
    pub fn from_environment(env: &Environment) -> Result<Self, ConfigError> {
        let mut vars = RequiredVars::new(env);
        let config = Self::resolve(&mut vars);
        vars.finish(config)
    }

    /// Read the database section into an existing collector.
    ///
    /// The returned value is only meaningful once `vars.finish` succeeds.
    pub(crate) fn resolve(vars: &mut RequiredVars<'_>) -> Self {
        Self {
            host: vars.get(DB_HOST_VAR, DEFAULT_DB_HOST),
            port: vars.get(DB_PORT_VAR, DEFAULT_DB_PORT),
            user: vars.require(DB_USER_VAR),
            password: vars.require_secret(DB_PASSWORD_VAR),
            name: vars.require(DB_NAME_VAR),
            schema: vars.get(DB_SCHEMA_VAR, DEFAULT_DB_SCHEMA),
            ssl_mode: vars.get(DB_SSL_MODE_VAR, DEFAULT_DB_SSL_MODE),
        }
    }

    /// libpq keyword/value connection string. Values are inserted verbatim.
    pub fn connection_string(&self) -> String {
        self.render(self.password.expose_secret())
    }

    fn render(&self, password: &str) -> String {
        format!(
            "host={} port={} user={} password={} dbname={} sslmode={} search_path={}",
            self.host, self.port, self.user, password, self.name, self.ssl_mode, self.schema
        )
    }
}

/// Same layout as `connection_string` with the password masked.
impl fmt::Display for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(REDACTED))
    }
}
