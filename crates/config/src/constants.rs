//! Centralized constants for the appenv workspace.
//!
//! Variable names and default values live here so the loader, the records
//! and the CLI agree on a single spelling.

// =============================================================================
// Override files
// =============================================================================

/// Base override file name, looked up in the root and its parent directory.
pub const DOTENV_FILE_NAME: &str = ".env";

/// Gate that skips every override file when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Selects the environment-specific override file (`.env.<APP_ENV>`).
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Environment name used when `APP_ENV` is unset.
pub const DEFAULT_APP_ENV: &str = "dev";

// =============================================================================
// Application
// =============================================================================

pub const APP_PORT_VAR: &str = "APP_PORT";
pub const DEFAULT_APP_PORT: &str = "8080";
pub const JWT_SECRET_VAR: &str = "JWT_SECRET";

// =============================================================================
// Database
// =============================================================================

pub const DB_HOST_VAR: &str = "DB_HOST";
pub const DB_PORT_VAR: &str = "DB_PORT";
pub const DB_USER_VAR: &str = "DB_USER";
pub const DB_PASSWORD_VAR: &str = "DB_PASSWORD";
pub const DB_NAME_VAR: &str = "DB_NAME";
pub const DB_SCHEMA_VAR: &str = "DB_SCHEMA";
pub const DB_SSL_MODE_VAR: &str = "DB_SSL_MODE";

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: &str = "5432";
pub const DEFAULT_DB_SCHEMA: &str = "public";
pub const DEFAULT_DB_SSL_MODE: &str = "disable";

/// Placeholder rendered in place of secrets in logs and `show` output.
pub const REDACTED: &str = "***";
