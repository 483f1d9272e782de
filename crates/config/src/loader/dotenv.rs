//! Override file parsing.
//!
//! Responsibilities:
//! - Parse one dotenv-format file into an `EnvLayer` without touching the process environment.
//! - Map `dotenvy` failures onto `ConfigError` variants that carry the path only.
//!
//! Does NOT handle:
//! - Deciding which files to read or in which order (see `builder.rs`).
//! - Swallowing failures; callers decide that.
//!
//! Invariants:
//! - A missing file is `Ok(None)`, never an error.
//! - A file that fails anywhere yields no layer at all, never a partial one.
//! - Error values NEVER include raw .env line contents to prevent secret leakage.

use std::path::Path;

use super::env::{EnvLayer, LayerSource};
use super::error::ConfigError;

/// Parse the override file at `path`.
pub fn read_layer(path: &Path) -> Result<Option<EnvLayer>, ConfigError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if is_not_found(&e) => return Ok(None),
        Err(e) => return Err(map_error(path, e)),
    };

    let vars = iter
        .collect::<Result<Vec<(String, String)>, _>>()
        .map_err(|e| map_error(path, e))?;

    Ok(Some(EnvLayer::new(
        LayerSource::File(path.to_path_buf()),
        vars,
    )))
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

fn map_error(path: &Path, err: dotenvy::Error) -> ConfigError {
    let path = path.to_path_buf();
    match err {
        dotenvy::Error::LineParse(_, error_index) => ConfigError::DotenvParse { path, error_index },
        dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
            path,
            kind: io_err.kind(),
        },
        _ => ConfigError::DotenvUnknown { path },
    }
}
