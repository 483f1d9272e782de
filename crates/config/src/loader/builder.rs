//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Discover override files and stack them with the process environment into an `Environment`.
//! - Resolve `APP_ENV` from the base layers and add the environment-specific override files.
//! - Assemble the final `AppConfig` from a loaded `Environment`.
//!
//! Does NOT handle:
//! - Parsing individual files (delegated to dotenv.rs).
//! - Key lookup and missing-key aggregation (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Precedence, highest first: `P/.env.<APP_ENV>`, `R/.env.<APP_ENV>`, process environment,
//!   `R/.env`, `P/.env`, where `R` is the root directory and `P` its parent.
//! - Environment-specific files are applied root first, then parent, each overwriting.
//! - `APP_ENV` is resolved once from the base layers and recorded on the snapshot.
//! - With an explicit env file only that file is read, below the process environment.
//! - Override file failures are logged at info level and never returned.
//! - The `DOTENV_DISABLED` variable is checked before any file is opened.
//! - Loading never mutates process state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::dotenv::read_layer;
use super::env::{EnvLayer, Environment, LayerSource};
use super::error::ConfigError;
use crate::constants::{APP_ENV_VAR, DEFAULT_APP_ENV, DOTENV_DISABLED_VAR, DOTENV_FILE_NAME};
use crate::types::{AppConfig, DatabaseConfig, JwtSecretPolicy};

/// Configuration loader that builds config from override files and environment variables.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    root_dir: Option<PathBuf>,
    env_file: Option<PathBuf>,
    ambient: Option<HashMap<String, String>>,
    jwt_secret_policy: JwtSecretPolicy,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory searched for `.env` files instead of the working directory.
    pub fn with_root_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(dir.into());
        self
    }

    /// Read only this file, skipping directory search and `APP_ENV` layering.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Use these variables in place of the process environment.
    pub fn with_ambient_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.ambient = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Choose whether `JWT_SECRET` is part of the assembled record.
    pub fn with_jwt_secret_policy(mut self, policy: JwtSecretPolicy) -> Self {
        self.jwt_secret_policy = policy;
        self
    }

    pub fn jwt_secret_policy(&self) -> JwtSecretPolicy {
        self.jwt_secret_policy
    }

    fn ambient_layer(&self) -> EnvLayer {
        match &self.ambient {
            Some(vars) => EnvLayer::new(LayerSource::Process, vars.clone()),
            None => EnvLayer::from_process(),
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled(ambient: &EnvLayer) -> bool {
        matches!(ambient.get(DOTENV_DISABLED_VAR), Some("true") | Some("1"))
    }

    /// Load the layered environment snapshot.
    ///
    /// Missing, unreadable or malformed override files are skipped; the result
    /// always contains at least the process environment.
    pub fn load_environment(&self) -> Environment {
        let ambient = self.ambient_layer();

        if Self::dotenv_disabled(&ambient) {
            tracing::debug!("{DOTENV_DISABLED_VAR} is set, skipping override files");
            return Environment::from_layers(vec![ambient]);
        }

        if let Some(path) = &self.env_file {
            let mut layers = Vec::with_capacity(2);
            push_file_layer(&mut layers, path);
            layers.push(ambient);
            return Environment::from_layers(layers);
        }

        let root = match self.resolve_root() {
            Ok(root) => root,
            Err(e) => {
                tracing::info!(error = %e, "no override files loaded, using process environment");
                return Environment::from_layers(vec![ambient]);
            }
        };
        let parent = root.parent().map(Path::to_path_buf);

        let mut layers = Vec::with_capacity(5);
        if let Some(parent) = &parent {
            push_file_layer(&mut layers, &parent.join(DOTENV_FILE_NAME));
        }
        push_file_layer(&mut layers, &root.join(DOTENV_FILE_NAME));
        layers.push(ambient);

        let base = Environment::from_layers(layers.clone());
        let app_env = base.get(APP_ENV_VAR, DEFAULT_APP_ENV);
        let app_env_source = base.source_of(APP_ENV_VAR).cloned();
        tracing::info!(app_env = %app_env, "resolved application environment");

        let specific = format!("{DOTENV_FILE_NAME}.{app_env}");
        push_file_layer(&mut layers, &root.join(&specific));
        if let Some(parent) = &parent {
            push_file_layer(&mut layers, &parent.join(&specific));
        }

        Environment::from_layers(layers).with_app_env(app_env, app_env_source)
    }

    /// Absolute root directory with `.` and symlinks resolved where possible.
    fn resolve_root(&self) -> Result<PathBuf, ConfigError> {
        let cwd = || std::env::current_dir().map_err(ConfigError::CurrentDir);
        let root = match &self.root_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd()?.join(dir),
            None => cwd()?,
        };
        Ok(std::fs::canonicalize(&root).unwrap_or(root))
    }

    /// Assemble the application configuration from a loaded snapshot.
    pub fn assemble(&self, env: &Environment) -> Result<AppConfig, ConfigError> {
        AppConfig::from_environment(env, self.jwt_secret_policy)
    }

    /// Load the snapshot once and build the final configuration.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let env = self.load_environment();
        self.assemble(&env)
    }
}

fn push_file_layer(layers: &mut Vec<EnvLayer>, path: &Path) {
    match read_layer(path) {
        Ok(Some(layer)) => {
            tracing::debug!(path = %path.display(), vars = layer.len(), "loaded override file");
            layers.push(layer);
        }
        Ok(None) => tracing::debug!(path = %path.display(), "override file not present"),
        Err(e) => tracing::info!(error = %e, "ignoring override file"),
    }
}

/// Load the application configuration using the working directory and process environment.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    ConfigLoader::new().build()
}

/// Read the database section from a loaded snapshot.
pub fn load_database_config(env: &Environment) -> Result<DatabaseConfig, ConfigError> {
    DatabaseConfig::from_environment(env)
}
