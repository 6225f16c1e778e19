//! # session-kb-mcp
//!
//! A Model Context Protocol (MCP) server that lets AI clients ask questions
//! about a knowledge-session document: which section covers a topic, how an
//! MCP server mentioned in the session is installed, and what the
//! architecture diagram looks like.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve a session document directly
//! session-kb-mcp --source fixtures/session-one.md
//!
//! # Or with a configuration file that enables reloading on change
//! session-kb-mcp --config session.toml
//! ```
//!
//! ## MCP Tools
//!
//! - `get_topic_information`: topic lookup by title, subsection or body text
//! - `get_mcp_server_details`: installation command and description of a server
//! - `show_architecture_diagram`: the mermaid diagram and its section
//! - `list_available_topics`: every heading in the session
//! - `status`: the loaded document and its reload generation
//! - `system_prompt`: an assistant prompt embedding the session text
//!
//! All answers are JSON. Blank topic or server names are rejected.
//!
//! ## Integration with Claude Desktop
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "session-kb": {
//!       "command": "session-kb-mcp",
//!       "args": ["--source", "/path/to/session.md"]
//!     }
//!   }
//! }
//! ```

mod server;
pub mod tools;

pub use server::SessionMcpServer;

use anyhow::Result;
use session_kb_retriever::{EngineHandle, SessionConfig, SourceWatcher};
use std::sync::Arc;
use tracing::info;

/// Configuration for the session MCP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Which document to serve and whether to watch it
    pub session: SessionConfig,
}

impl ServerConfig {
    pub fn new(session: SessionConfig) -> Self {
        Self { session }
    }
}

/// Load the session document and serve it over stdio until the client
/// disconnects.
///
/// # Errors
/// - The session document is missing, unreadable or blank
/// - The file watcher cannot be started (when `watch` is enabled)
/// - MCP protocol communication errors
pub async fn run_server(config: ServerConfig) -> Result<()> {
    info!(
        "Starting session MCP server for {}",
        config.session.source_path.display()
    );

    let handle = Arc::new(EngineHandle::initialize(&config.session)?);

    let _watcher = if config.session.watch {
        Some(SourceWatcher::start(handle.clone(), config.session.clone())?)
    } else {
        None
    };

    info!("Session loaded, starting stdio transport");
    SessionMcpServer::new(handle).serve_stdio().await
}
