use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    sync::Arc,
};

use notify::Watcher;
use notify_debouncer_mini::{DebounceEventResult, Debouncer, new_debouncer};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::handle::EngineHandle;

/// Reloads an [`EngineHandle`] whenever its source file changes on disk.
///
/// Dropping the watcher stops both the file notifications and the reload task.
pub struct SourceWatcher {
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    listener: tokio::task::JoinHandle<()>,
}

impl SourceWatcher {
    /// Start watching `config.source_path`. Must be called inside a tokio runtime.
    pub fn start(handle: Arc<EngineHandle>, config: SessionConfig) -> Result<Self> {
        let dir = watch_dir(&config.source_path);
        let file_name = config.source_path.file_name().map(OsString::from);

        // One pending reload covers any number of changes seen while it waits
        let (changes_tx, changes_rx) = mpsc::channel(1);

        let listener = tokio::task::spawn(Self::listen(changes_rx, handle, config.clone()));

        let mut debouncer = new_debouncer(config.debounce(), move |res: DebounceEventResult| {
            match res {
                Ok(events) => {
                    let touched = events
                        .iter()
                        .any(|ev| ev.path.file_name() == file_name.as_deref());
                    if touched {
                        // Full means a reload is already queued
                        let _ = changes_tx.try_send(());
                    }
                }
                Err(e) => error!("File watcher error: {e}"),
            }
        })?;

        debouncer
            .watcher()
            .watch(&dir, notify::RecursiveMode::NonRecursive)?;
        info!(
            "Watching {} for changes",
            config.source_path.display()
        );

        Ok(Self {
            _debouncer: debouncer,
            listener,
        })
    }

    async fn listen(
        mut changes_rx: mpsc::Receiver<()>,
        handle: Arc<EngineHandle>,
        config: SessionConfig,
    ) {
        while changes_rx.recv().await.is_some() {
            debug!("Source changed: {}", config.source_path.display());
            if let Err(e) = handle.reload(&config) {
                error!(
                    "Failed to reload {}: {}",
                    config.source_path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for SourceWatcher {
    fn drop(&mut self) {
        self.listener.abort();
    }
}

fn watch_dir(source_path: &Path) -> PathBuf {
    match source_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
