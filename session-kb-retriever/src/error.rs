//! Error types for loading and serving a session document

use std::path::PathBuf;

/// Result type for retriever operations.
pub type Result<T> = std::result::Result<T, RetrieverError>;

/// Failures that can stop a session document from backing live queries.
///
/// Query misses are not errors: every retrieval query returns a result value,
/// with a "not found" variant when nothing matches.
#[derive(Debug, thiserror::Error)]
pub enum RetrieverError {
    /// The session document could not be read, or was empty
    #[error("Session source unavailable at {}: {reason}", path.display())]
    SourceUnavailable { path: PathBuf, reason: String },

    /// The configuration file could not be parsed
    #[error("Invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// IO errors outside of reading the session source
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// The file watcher could not be started
    #[error("File watcher failed: {source}")]
    Watch {
        #[from]
        source: notify::Error,
    },
}

impl RetrieverError {
    /// Create a source-unavailable error for `path`.
    pub fn source_unavailable<P, S>(path: P, reason: S) -> Self
    where
        P: Into<PathBuf>,
        S: Into<String>,
    {
        Self::SourceUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors that mean there is no document to serve.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}
