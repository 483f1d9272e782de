//! Configuration record definitions.
//!
//! Responsibilities:
//! - Define `DatabaseConfig` and `AppConfig` and how each is read from an `Environment`.
//! - Render the PostgreSQL connection string.
//! - Provide redacting serialization for secret fields.
//!
//! Does NOT handle:
//! - Override file discovery or layering (see `loader` module).
//! - Validation of value formats; every field is kept as the verbatim string.
//!
//! Invariants:
//! - All secret fields use `secrecy::SecretString` to prevent accidental logging.
//! - Serialized output never contains a secret value.

mod app;
mod database;

pub use app::{AppConfig, JwtSecretPolicy};
pub use database::DatabaseConfig;

/// Serialize a secret as a fixed placeholder.
mod redacted {
    use secrecy::SecretString;
    use serde::Serializer;

    use crate::constants::REDACTED;

    pub fn serialize<S>(_secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(REDACTED)
    }

    pub mod option {
        use secrecy::SecretString;
        use serde::Serializer;

        use crate::constants::REDACTED;

        pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match secret {
                Some(_) => serializer.serialize_some(REDACTED),
                None => serializer.serialize_none(),
            }
        }
    }
}
