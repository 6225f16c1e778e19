//! A shared, swappable engine.
//!
//! Readers take a cheap [`Arc`] snapshot and query it without holding the
//! lock. A reload parses the source into a fresh engine and swaps the pointer
//! only when that succeeds, so a broken edit never replaces a working document.

use crate::config::SessionConfig;
use crate::error::Result;
use crate::retrieval::engine::RetrievalEngine;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub(crate) struct Loaded {
    pub(crate) engine: Arc<RetrievalEngine>,
    pub(crate) source_path: PathBuf,
    pub(crate) generation: u64,
    pub(crate) loaded_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct EngineHandle {
    inner: RwLock<Loaded>,
}

impl EngineHandle {
    /// Wrap an engine built from the document at `source_path`.
    pub fn new<P: Into<PathBuf>>(engine: RetrievalEngine, source_path: P) -> Self {
        Self {
            inner: RwLock::new(Loaded {
                engine: Arc::new(engine),
                source_path: source_path.into(),
                generation: 0,
                loaded_at: Utc::now(),
            }),
        }
    }

    /// Build the first engine from `config`.
    pub fn initialize(config: &SessionConfig) -> Result<Self> {
        let engine = RetrievalEngine::initialize(config)?;
        Ok(Self::new(engine, &config.source_path))
    }

    pub(crate) fn snapshot(&self) -> Loaded {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The engine serving queries right now.
    pub fn current(&self) -> Arc<RetrievalEngine> {
        self.snapshot().engine
    }

    /// Re-read and re-parse the source named by `config`.
    ///
    /// On success the new engine replaces the current one and the new
    /// generation number is returned. On failure the current engine stays in
    /// place and the error is returned.
    pub fn reload(&self, config: &SessionConfig) -> Result<u64> {
        let engine = match RetrievalEngine::initialize(config) {
            Ok(engine) => engine,
            Err(e) => {
                warn!("Reload failed, keeping the previous document: {e}");
                return Err(e);
            }
        };

        let mut loaded = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        loaded.engine = Arc::new(engine);
        loaded.source_path = config.source_path.clone();
        loaded.generation += 1;
        loaded.loaded_at = Utc::now();
        info!(
            "Reloaded session from {} (generation {})",
            loaded.source_path.display(),
            loaded.generation
        );
        Ok(loaded.generation)
    }

    /// Number of successful reloads since the handle was created.
    pub fn generation(&self) -> u64 {
        self.snapshot().generation
    }

    /// When the current engine was installed.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.snapshot().loaded_at
    }

    pub fn source_path(&self) -> PathBuf {
        self.snapshot().source_path
    }
}
