//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test layer precedence between base files, environment-specific files and ambient variables.
//! - Test the explicit env file and `DOTENV_DISABLED` paths.
//! - Test loading against the real working directory and process environment.
//!
//! Invariants:
//! - Tests that touch the process environment or cwd use `serial_test` and `env_lock()`.
//! - Directory-based tests use a nested root so the parent directory is also a temp dir.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// A temp workspace with an `app/` root directory whose parent is the temp dir itself.
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

    pub fn write_root(&self, name: &str, contents: &str) {
        fs::write(self.root.join(name), contents).unwrap();
    }

    pub fn write_parent(&self, name: &str, contents: &str) {
        fs::write(self.dir.path().join(name), contents).unwrap();
    }
}
