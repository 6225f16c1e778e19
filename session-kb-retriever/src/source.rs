//! Reading the session document from disk.

use crate::error::{Result, RetrieverError};
use std::path::Path;
use tracing::info;

/// Read the session document at `path`.
///
/// Unreadable files and files holding only whitespace are both reported as
/// [`RetrieverError::SourceUnavailable`]; there is never an empty document to serve.
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| RetrieverError::source_unavailable(path, e.to_string()))?;

    if raw.trim().is_empty() {
        return Err(RetrieverError::source_unavailable(
            path,
            "file exists but is empty",
        ));
    }

    info!(
        "Read session source from {} ({} characters)",
        path.display(),
        raw.chars().count()
    );
    Ok(raw)
}
