//! appenv - validate and inspect environment-driven service configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Act as the composition root: load override files once, assemble the configuration,
//!   and terminate with a structured exit code when required variables are missing.
//!
//! Does NOT handle:
//! - Layering or lookup rules (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr so stdout stays machine-readable.
//! - A missing required variable exits with code 2 and names every missing key.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
