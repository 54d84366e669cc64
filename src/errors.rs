//! Error types for the analyzer.
//!
//! Only environment failures are errors. A moji that cannot be parsed is
//! skipped by the driver and counted in its stats, never reported here.

use std::path::PathBuf;

/// Result type with [`AnalyzerError`] as the default error.
pub type Result<T, E = AnalyzerError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// The corpus could not be read. Fatal: the run aborts before any parsing.
    #[error("could not read corpus '{}': {source}", path.display())]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The temporary dictionary file could not replace the target.
    #[error(transparent)]
    Persist(#[from] tempfile::PersistError),
}
