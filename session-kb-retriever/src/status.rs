//! A point-in-time description of the document being served.

use crate::handle::EngineHandle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What the engine is serving and when it was loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStatus {
    /// Path the current document was read from
    pub source_path: PathBuf,
    /// Title from the header block (empty when absent)
    pub title: String,
    /// Date from the header block (empty when absent)
    pub date: String,
    /// Number of distinct heading titles
    pub topics: usize,
    /// Number of top-level sections, synthetic ones included
    pub sections: usize,
    /// Number of depth-2 sections nested under a depth-1 section
    pub subsections: usize,
    /// Number of closed code blocks
    pub code_blocks: usize,
    /// Detected server names in detection order
    pub servers: Vec<String>,
    /// Successful reloads since startup
    pub generation: u64,
    /// When the current document was installed
    pub loaded_at: DateTime<Utc>,
}

impl SessionStatus {
    pub fn from_handle(handle: &EngineHandle) -> Self {
        let loaded = handle.snapshot();
        let doc = loaded.engine.document();
        let subsections = doc.sections.iter().map(|s| s.subsections.len()).sum();

        Self {
            source_path: loaded.source_path.clone(),
            title: doc.title.clone(),
            date: doc.date.clone(),
            topics: doc.topics.len(),
            sections: doc.sections.len(),
            subsections,
            code_blocks: doc.code_blocks.len(),
            servers: doc.server_names(),
            generation: loaded.generation,
            loaded_at: loaded.loaded_at,
        }
    }
}
