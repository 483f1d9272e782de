//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Translate global flags into a configured `ConfigLoader`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use appenv_config::{ConfigLoader, JwtSecretPolicy};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "appenv")]
#[command(about = "Validate and inspect environment-driven service configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  appenv check\n  APP_ENV=staging appenv show --format json\n  appenv --env-file deploy/prod.env connection-string\n"
)]
pub struct Cli {
    /// Directory searched for `.env` and `.env.<APP_ENV>` (its parent is searched too)
    #[arg(long, global = true, env = "APPENV_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Load only this override file (disables directory search and APP_ENV layering)
    #[arg(long, global = true, env = "APPENV_ENV_FILE", value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Do not require or read JWT_SECRET
    #[arg(long, global = true)]
    pub no_jwt_secret: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the configuration and print the redacted connection string
    Check,

    /// Print the resolved configuration with secrets redacted
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the PostgreSQL connection string, including the password
    ConnectionString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Build the loader described by the global flags.
    ///
    /// Blank paths are ignored so an empty `APPENV_*` variable falls back to the defaults.
    pub fn loader(&self) -> ConfigLoader {
        let mut loader = ConfigLoader::new();
        if let Some(root) = non_blank(&self.root) {
            loader = loader.with_root_dir(root);
        }
        if let Some(path) = non_blank(&self.env_file) {
            loader = loader.with_env_file(path);
        }
        if self.no_jwt_secret {
            loader = loader.with_jwt_secret_policy(JwtSecretPolicy::Disabled);
        }
        loader
    }
}

fn non_blank(path: &Option<PathBuf>) -> Option<PathBuf> {
    path.as_ref()
        .filter(|p| !p.to_string_lossy().trim().is_empty())
        .cloned()
}
