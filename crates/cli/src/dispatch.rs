//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Build the loader from global flags once per invocation.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code selection (see `error` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: &Cli) -> Result<()> {
    let loader = cli.loader();
    match &cli.command {
        Commands::Check => commands::check::run(&loader),
        Commands::Show { format } => commands::show::run(&loader, *format),
        Commands::ConnectionString => commands::connection_string::run(&loader),
    }
}
