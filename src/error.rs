//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for bibscope's fallible surface (the store
/// and the CLI). The analytics themselves are total and return plain
/// values; only I/O can fail.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading the persisted article collection fails.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No collection has been saved at the expected path. Callers treat
    /// this as "go ingest a file first", not as a crash.
    #[error("no article collection found at {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but is not a valid collection.
    #[error("failed to parse article collection at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file could not be read or written.
    #[error("failed to access article collection at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
