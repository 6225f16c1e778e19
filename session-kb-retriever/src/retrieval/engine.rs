use super::architecture::find_architecture;
use super::results::{ArchitectureResult, ServerResult, TopicResult};
use super::server::find_server;
use super::strategy::Query;
use super::topic::find_topic;
use crate::config::SessionConfig;
use crate::error::Result;
use crate::source::load_source;
use session_kb_parser::{Document, SessionParser};
use tracing::info;

/// Answers topic, server and architecture questions about one parsed session.
///
/// The engine is immutable once built; a changed source produces a new
/// engine (see [`crate::EngineHandle`]).
#[derive(Debug, Clone, Default)]
pub struct RetrievalEngine {
    document: Document,
    raw: String,
}

impl RetrievalEngine {
    /// Wrap an already parsed document. The raw source is left empty.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            raw: String::new(),
        }
    }

    /// Parse `raw` with `parser` and keep the text alongside the document.
    pub fn from_source<S: Into<String>>(raw: S, parser: &SessionParser) -> Self {
        let raw = raw.into();
        Self {
            document: parser.parse(&raw),
            raw,
        }
    }

    /// Read and parse the source named by `config`.
    ///
    /// Fails with [`crate::RetrieverError::SourceUnavailable`] when the file is
    /// missing, unreadable or blank; no engine is built in that case.
    pub fn initialize(config: &SessionConfig) -> Result<Self> {
        let raw = load_source(&config.source_path)?;
        let engine = Self::from_source(raw, &config.parser());
        info!(
            "Initialized retrieval engine for '{}' with {} topics",
            engine.document.title,
            engine.document.topics.len()
        );
        Ok(engine)
    }

    pub fn find_topic(&self, topic: &str) -> TopicResult {
        find_topic(&self.document, &Query::new(topic))
    }

    pub fn find_server(&self, server_name: &str) -> ServerResult {
        find_server(&self.document, &Query::new(server_name))
    }

    pub fn find_architecture(&self) -> ArchitectureResult {
        find_architecture(&self.document)
    }

    /// Every heading title in first-appearance order.
    pub fn list_topics(&self) -> &[String] {
        &self.document.topics
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The text the document was parsed from.
    pub fn raw_source(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session_kb_parser::parse_session;
    use std::fs;
    use tempfile::tempdir;

    const RAW: &str = "---\ntitle: Demo\n---\n# MCP Servers\nRepomix packs repos.\n```bash\nnpx repomix --mcp\n```\n# Knowledge Architecture\n```mermaid\nflowchart LR\n```\n";

    #[test]
    fn test_queries_delegate_to_chains() {
        let engine = RetrievalEngine::from_source(RAW, &SessionParser::default());
        assert_eq!(engine.raw_source(), RAW);
        assert_eq!(engine.document().title, "Demo");
        assert_eq!(
            engine.list_topics(),
            ["MCP Servers", "Knowledge Architecture"]
        );
        assert_eq!(engine.find_topic("mcp servers").match_type(), "exact");
        assert_eq!(
            engine.find_server("repomix").installation_code(),
            Some("npx repomix --mcp\n")
        );
        assert_eq!(
            engine.find_architecture().diagram_code(),
            Some("flowchart LR\n")
        );
    }

    #[test]
    fn test_new_keeps_document_without_source() {
        let engine = RetrievalEngine::new(parse_session("# Only\n"));
        assert_eq!(engine.list_topics(), ["Only"]);
        assert!(engine.raw_source().is_empty());
    }

    #[test]
    fn test_initialize_reads_configured_source() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("session.md");
        fs::write(&path, "# MCP\n```\nnpx context7\n```\n")?;

        let config = SessionConfig::new(&path).with_servers(["context7"]);
        let engine = RetrievalEngine::initialize(&config)?;
        assert_eq!(engine.document().server_names(), vec!["Context7"]);
        Ok(())
    }

    #[test]
    fn test_initialize_refuses_blank_source() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("session.md");
        fs::write(&path, " \n\t\n")?;

        let err = RetrievalEngine::initialize(&SessionConfig::new(&path)).unwrap_err();
        assert!(err.is_source_unavailable());
        Ok(())
    }
}
