use thiserror::Error;

/// Errors produced by the store layer.
///
/// Note what is *not* here: a missing record is reported as a value
/// (`Option` / `bool`) by the operations themselves, and an unreadable or
/// corrupt writings slot is recovered silently as an empty collection.
/// Only failures to persist surface as errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Generic I/O error (e.g. creating the data directory, writing a slot).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the collection before writing it back.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
