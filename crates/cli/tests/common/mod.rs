//! Shared test utilities for appenv integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that ignores host configuration.
//! - Provide a temp workspace with a nested root so the parent directory is controlled too.
//!
//! Invariants / Assumptions:
//! - Every variable the loader reads is removed from the child environment.
//! - `RUST_LOG` is cleared so stderr only carries error output unless a test sets it.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const LOADER_VARS: [&str; 14] = [
    "APP_ENV",
    "APP_PORT",
    "JWT_SECRET",
    "DB_HOST",
    "DB_PORT",
    "DB_USER",
    "DB_PASSWORD",
    "DB_NAME",
    "DB_SCHEMA",
    "DB_SSL_MODE",
    "DOTENV_DISABLED",
    "APPENV_ROOT",
    "APPENV_ENV_FILE",
    "RUST_LOG",
];

/// A temp directory containing an `app/` root.
pub struct Workspace {
    pub dir: TempDir,
    pub root: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("app");
        fs::create_dir(&root).unwrap();
        Self { dir, root }
    }

    pub fn write_root(&self, name: &str, contents: &str) -> &Self {
        fs::write(self.root.join(name), contents).unwrap();
        self
    }

    #[allow(dead_code)]
    pub fn write_parent(&self, name: &str, contents: &str) -> &Self {
        fs::write(self.dir.path().join(name), contents).unwrap();
        self
    }

    /// Returns a hermetic `appenv` command running inside the workspace root.
    pub fn cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("appenv");
        cmd.current_dir(&self.root);
        for key in LOADER_VARS {
            cmd.env_remove(key);
        }
        cmd
    }
}
