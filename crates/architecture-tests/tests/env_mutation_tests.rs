//! Purpose: Keep configuration loading free of hidden process-global side effects.
//!
//! The config crate resolves variables into an owned snapshot; only the explicit
//! `Environment::export_to_process` may write the process environment, and the
//! library never terminates the process on behalf of its caller.
//!
//! Non-scope: This test does not verify runtime behavior; it only checks
//! source code patterns. Files are analyzed statically.
//!
//! Invariants:
//! - `set_var`/`remove_var` appear only in `loader/env.rs` outside tests
//! - `set_current_dir` never appears in library code
//! - `process::exit` never appears in library code

mod support;

use std::fs;
use support::{find_workspace_root, is_test_file, non_test_source, rust_files};

/// The one file allowed to write the process environment.
const ENV_WRITER: &str = "loader/env.rs";

#[test]
fn test_library_does_not_mutate_process_state() {
    let config_src = find_workspace_root().join("crates/config/src");
    assert!(config_src.exists(), "config sources not found at {config_src:?}");

    let mut violations: Vec<String> = Vec::new();

    for path in rust_files(&config_src) {
        if is_test_file(&path) {
            continue;
        }
        let content = fs::read_to_string(&path).unwrap_or_default();
        let source = non_test_source(&content);
        let path_str = path.to_string_lossy();

        if (source.contains("set_var(") || source.contains("remove_var("))
            && !path_str.ends_with(ENV_WRITER)
        {
            violations.push(format!(
                "{}: writes the process environment - return values through Environment instead",
                path.display()
            ));
        }

        if source.contains("set_current_dir(") {
            violations.push(format!("{}: changes the working directory", path.display()));
        }

        if source.contains("process::exit") {
            violations.push(format!(
                "{}: terminates the process - return ConfigError and let the binary decide",
                path.display()
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Found process-global side effects in the config crate:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_non_test_source_strips_test_module() {
    let content = "fn a() {}\n#[cfg(test)]\nmod tests { fn b() { std::env::set_var(\"K\", \"V\"); } }\n";

    let source = non_test_source(content);

    assert!(source.contains("fn a() {}"));
    assert!(!source.contains("set_var"));
}

#[test]
fn test_non_test_source_keeps_code_after_test_module_declaration() {
    let content = "mod builder;\n#[cfg(test)]\nmod tests;\n\npub fn export() { std::env::set_var(\"K\", \"V\"); }\n";

    let source = non_test_source(content);

    assert!(!source.contains("mod tests"));
    assert!(source.contains("mod builder;"));
    assert!(source.contains("set_var("));
}

#[test]
fn test_non_test_source_strips_each_test_item() {
    let content = "#[cfg(test)]\nfn helper() { if true { let _ = 1; } }\nfn kept() {}\n#[cfg(test)]\nmod tests { fn t() {} }\nfn tail() {}\n";

    let source = non_test_source(content);

    assert!(!source.contains("helper"));
    assert!(!source.contains("fn t()"));
    assert!(source.contains("fn kept() {}"));
    assert!(source.contains("fn tail() {}"));
}
