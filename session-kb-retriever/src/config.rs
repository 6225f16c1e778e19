//! Configuration for loading a session document.
//!
//! Settings live in a small TOML file:
//!
//! ```toml
//! source_path = "fixtures/session-one.md"
//! servers = ["perplexity", "firecrawl", "agentql", "repomix"]
//! watch = true
//! debounce_ms = 500
//! ```
//!
//! Only `source_path` is required. Command-line flags override file values.

use crate::error::{Result, RetrieverError};
use serde::{Deserialize, Serialize};
use session_kb_parser::{DEFAULT_SERVER_NAMES, ServerVocabulary, SessionParser};
use std::path::{Path, PathBuf};
use std::time::Duration;

fn default_servers() -> Vec<String> {
    DEFAULT_SERVER_NAMES.iter().map(|s| s.to_string()).collect()
}

fn default_debounce_ms() -> u64 {
    500
}

/// Where the session document lives and how it is parsed and watched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the session document
    pub source_path: PathBuf,
    /// Server names recognized inside MCP/server sections
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,
    /// Reload the document when it changes on disk
    #[serde(default)]
    pub watch: bool,
    /// Quiet period before a change triggers a reload
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl SessionConfig {
    /// Create a configuration with default settings for `source_path`.
    ///
    /// # Example
    /// ```
    /// use session_kb_retriever::SessionConfig;
    ///
    /// let config = SessionConfig::new("session.md").with_watch(true);
    /// assert!(config.watch);
    /// assert_eq!(config.servers.len(), 4);
    /// ```
    pub fn new<P: Into<PathBuf>>(source_path: P) -> Self {
        Self {
            source_path: source_path.into(),
            servers: default_servers(),
            watch: false,
            debounce_ms: default_debounce_ms(),
        }
    }

    /// Read a configuration from a TOML file.
    ///
    /// A relative `source_path` is resolved against the directory holding the
    /// configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut config: SessionConfig =
            toml::from_str(&text).map_err(|source| RetrieverError::Config {
                path: path.to_path_buf(),
                source,
            })?;

        if config.source_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.source_path = dir.join(&config.source_path);
            }
        }
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Replace the recognized server names (builder style)
    pub fn with_servers<I, S>(self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            servers: servers.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Enable or disable reloading on change (builder style)
    pub fn with_watch(self, watch: bool) -> Self {
        Self { watch, ..self }
    }

    /// Set the debounce window in milliseconds (builder style)
    pub fn with_debounce_ms(self, debounce_ms: u64) -> Self {
        Self {
            debounce_ms,
            ..self
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Build the parser described by this configuration.
    pub fn parser(&self) -> SessionParser {
        SessionParser::new(ServerVocabulary::new(&self.servers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_applies_defaults_and_resolves_relative_source() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let config_path = dir.path().join("session.toml");
        std::fs::write(&config_path, "source_path = \"notes/session.md\"\n")?;

        let config = SessionConfig::load(&config_path)?;
        assert_eq!(config.source_path, dir.path().join("notes/session.md"));
        assert_eq!(config.servers, default_servers());
        assert!(!config.watch);
        assert_eq!(config.debounce(), Duration::from_millis(500));
        Ok(())
    }

    #[test]
    fn test_load_reads_all_fields() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let config_path = dir.path().join("session.toml");
        let mut file = std::fs::File::create(&config_path)?;
        writeln!(
            file,
            "source_path = \"/srv/session.md\"\nservers = [\"context7\"]\nwatch = true\ndebounce_ms = 50"
        )?;

        let config = SessionConfig::load(&config_path)?;
        assert_eq!(config.source_path, PathBuf::from("/srv/session.md"));
        assert_eq!(config.servers, vec!["context7".to_string()]);
        assert!(config.watch);
        assert_eq!(config.debounce_ms, 50);
        Ok(())
    }

    #[test]
    fn test_load_rejects_invalid_toml() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let config_path = dir.path().join("session.toml");
        std::fs::write(&config_path, "watch = true\n")?;

        let err = SessionConfig::load(&config_path).unwrap_err();
        assert!(matches!(err, RetrieverError::Config { .. }));
        Ok(())
    }

    #[test]
    fn test_parser_uses_configured_servers() {
        let config = SessionConfig::new("session.md").with_servers(["linear"]);
        let doc = config
            .parser()
            .parse("# MCP\n```\nnpx linear-mcp repomix\n```\n");
        assert_eq!(doc.server_names(), vec!["Linear"]);
    }
}
