//! Source-walking helpers shared by the architecture tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Find the workspace root by looking for Cargo.toml with [workspace].
pub fn find_workspace_root() -> PathBuf {
    let current_dir = std::env::current_dir().expect("Failed to get current directory");

    let mut dir = current_dir.as_path();
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists()
            && let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return current_dir,
        }
    }
}

/// All .rs files under `dir`, skipping build output and this crate.
pub fn rust_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Test files are integration tests, `*_tests.rs` modules and `loader/tests/`.
pub fn is_test_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    path_str.contains("/tests/") || path_str.ends_with("_tests.rs")
}

/// Source text with every `#[cfg(test)]` item removed.
///
/// An item ends at a `;` seen before any `{` (`mod tests;`), otherwise at the
/// brace that closes its first block. Braces inside literals are not special.
pub fn non_test_source(content: &str) -> String {
    const CFG_TEST: &str = "#[cfg(test)]";

    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(idx) = rest.find(CFG_TEST) {
        out.push_str(&rest[..idx]);
        rest = &rest[idx + CFG_TEST.len()..];
        rest = &rest[item_len(rest)..];
    }
    out.push_str(rest);
    out
}

fn item_len(item: &str) -> usize {
    let mut depth = 0usize;
    for (idx, c) in item.char_indices() {
        match c {
            ';' if depth == 0 => return idx + 1,
            '{' => depth += 1,
            '}' if depth == 1 => return idx + 1,
            '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    item.len()
}
