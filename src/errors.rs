// src/errors.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by the checklist store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying database rejected a statement or could not be opened
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The directory holding the database file could not be prepared
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

/// Failures of the `install-rule` helper.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The rule file to copy does not exist
    #[error("rule asset not found at {}", path.display())]
    AssetMissing { path: PathBuf },

    /// A destination directory or file could not be written
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
