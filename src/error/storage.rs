//! Errors raised by the flat-file roster and guild stores.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading, writing, or renaming a store file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A store file does not contain the expected JSON document.
    #[error("Malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record parsed as JSON but violates the store's invariants.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A snowflake id stored as a string is not a non-zero `u64`.
    #[error("Failed to parse id '{value}': {source}")]
    InvalidId {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
