//! Layered environment snapshot and variable accessors.
//!
//! Responsibilities:
//! - Hold the variables contributed by each configuration source as an ordered list of layers.
//! - Resolve a key against the layers (highest precedence wins) and report which layer supplied it.
//! - Provide `get` (presence semantics) and `get_required` (non-empty semantics) accessors.
//! - Collect every missing required key in one pass via `RequiredVars`.
//!
//! Does NOT handle:
//! - Discovering or parsing override files (see `dotenv.rs` and `builder.rs`).
//! - Assembling configuration records (see the `types` module).
//!
//! Invariants:
//! - Layers are stored lowest precedence first; a later layer overwrites an earlier one.
//! - A key present with an empty value is "present" for `get` and "missing" for `get_required`.
//! - The snapshot is never written back to the process environment except through
//!   `export_to_process`.

use secrecy::SecretString;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// Where the variables of a layer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerSource {
    /// Variables inherited by the process (or injected in place of it).
    Process,
    /// An override file.
    File(PathBuf),
}

impl LayerSource {
    /// Path of the override file, if this is a file layer.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LayerSource::Process => None,
            LayerSource::File(path) => Some(path),
        }
    }
}

impl fmt::Display for LayerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerSource::Process => write!(f, "process environment"),
            LayerSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One source of variables.
#[derive(Debug, Clone)]
pub struct EnvLayer {
    source: LayerSource,
    vars: HashMap<String, String>,
}

impl EnvLayer {
    pub fn new<I, K, V>(source: LayerSource, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            source,
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Snapshot the variables of the running process.
    ///
    /// Entries whose key or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
        Self::new(LayerSource::Process, vars)
    }

    pub fn source(&self) -> &LayerSource {
        &self.source
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Resolved view over a stack of layers.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    layers: Vec<EnvLayer>,
    // key -> index of the winning layer
    winners: HashMap<String, usize>,
    app_env: Option<AppEnv>,
}

/// The `APP_ENV` value that selected the environment-specific files.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AppEnv {
    name: String,
    source: Option<LayerSource>,
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.lookup(k) == Some(v))
    }
}

impl Environment {
    /// Build a snapshot from layers ordered lowest precedence first.
    pub fn from_layers(layers: Vec<EnvLayer>) -> Self {
        let mut winners = HashMap::new();
        for (idx, layer) in layers.iter().enumerate() {
            for key in layer.vars.keys() {
                winners.insert(key.clone(), idx);
            }
        }
        Self {
            layers,
            winners,
            app_env: None,
        }
    }

    /// Record the `APP_ENV` value used for layering and where it came from.
    pub(crate) fn with_app_env(mut self, name: String, source: Option<LayerSource>) -> Self {
        self.app_env = Some(AppEnv { name, source });
        self
    }

    /// `APP_ENV` as resolved from the base layers, before environment-specific files.
    ///
    /// `None` when no layering took place (explicit env file, `DOTENV_DISABLED`,
    /// or a snapshot built directly from layers).
    pub fn app_env(&self) -> Option<&str> {
        self.app_env.as_ref().map(|a| a.name.as_str())
    }

    /// Layer that supplied `app_env()`; `None` if it is the built-in default.
    pub fn app_env_source(&self) -> Option<&LayerSource> {
        self.app_env.as_ref()?.source.as_ref()
    }

    /// Convenience constructor for a single in-memory layer.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::from_layers(vec![EnvLayer::new(LayerSource::Process, vars)])
    }

    /// Value of `key` if any layer defines it.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let idx = *self.winners.get(key)?;
        self.layers[idx].get(key)
    }

    /// Value of `key` if present (even when empty), otherwise `fallback`.
    pub fn get(&self, key: &str, fallback: &str) -> String {
        self.lookup(key).unwrap_or(fallback).to_string()
    }

    /// Value of `key` if present and non-empty.
    pub fn get_required(&self, key: &str) -> Result<String, ConfigError> {
        match self.lookup(key) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(ConfigError::MissingEnvVar(key.to_string())),
        }
    }

    /// The layer that supplied the effective value of `key`.
    pub fn source_of(&self, key: &str) -> Option<&LayerSource> {
        let idx = *self.winners.get(key)?;
        Some(&self.layers[idx].source)
    }

    /// Layers in precedence order, lowest first.
    pub fn layers(&self) -> &[EnvLayer] {
        &self.layers
    }

    /// Effective key/value pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.winners
            .iter()
            .filter_map(|(key, &idx)| Some((key.as_str(), self.layers[idx].get(key)?)))
    }

    pub fn len(&self) -> usize {
        self.winners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }

    /// Write every variable supplied by a file layer into the process environment.
    ///
    /// Variables that come from the process layer are already there and are left alone.
    ///
    /// # Safety
    ///
    /// Mutates process-global state. The caller must guarantee no other thread reads
    /// or writes the environment concurrently, typically by calling this at the top of
    /// `main` before any thread is spawned.
    pub unsafe fn export_to_process(&self) {
        for (key, &idx) in &self.winners {
            let layer = &self.layers[idx];
            if layer.source == LayerSource::Process {
                continue;
            }
            if let Some(value) = layer.get(key) {
                // SAFETY: upheld by the caller per this function's contract.
                unsafe { std::env::set_var(key, value) };
            }
        }
    }
}

/// Resolves several required variables and reports all missing ones together.
pub struct RequiredVars<'a> {
    env: &'a Environment,
    missing: Vec<String>,
}

impl<'a> RequiredVars<'a> {
    pub fn new(env: &'a Environment) -> Self {
        Self {
            env,
            missing: Vec::new(),
        }
    }

    /// Optional variable with a fallback, same as `Environment::get`.
    pub fn get(&self, key: &str, fallback: &str) -> String {
        self.env.get(key, fallback)
    }

    /// Required variable. A missing key is recorded and an empty string returned.
    pub fn require(&mut self, key: &str) -> String {
        match self.env.get_required(key) {
            Ok(value) => value,
            Err(_) => {
                self.missing.push(key.to_string());
                String::new()
            }
        }
    }

    pub fn require_secret(&mut self, key: &str) -> SecretString {
        SecretString::new(self.require(key).into())
    }

    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Return `value` if nothing was missing, otherwise the aggregated error.
    pub fn finish<T>(self, value: T) -> Result<T, ConfigError> {
        if self.missing.is_empty() {
            Ok(value)
        } else {
            Err(ConfigError::missing(self.missing))
        }
    }
}
