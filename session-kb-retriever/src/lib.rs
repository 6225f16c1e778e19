//! session-kb-retriever: question answering over a parsed knowledge-session document
//!
//! The crate loads one session document, parses it with
//! [`session_kb_parser`], and answers three kinds of question about it:
//! which section covers a topic, how a named MCP server is installed, and
//! where the architecture diagram is. Every query returns a value; misses are
//! "not found" variants with suggestions rather than errors.
//!
//! ## Key Modules
//!
//! - **[`retrieval`]**: The engine, its ordered lookup chains, and result types
//! - **[`handle`]**: A shared engine that can be swapped when the source changes
//! - **[`config`]**: TOML configuration for the source path, vocabulary and watching
//! - **[`status`]**: A summary of what is currently being served
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use session_kb_retriever::{RetrievalEngine, SessionConfig};
//!
//! # fn example() -> session_kb_retriever::Result<()> {
//! let config = SessionConfig::new("session.md");
//! let engine = RetrievalEngine::initialize(&config)?;
//!
//! let topic = engine.find_topic("Claude Code");
//! println!("{}: {}", topic.title(), topic.content());
//!
//! let server = engine.find_server("Firecrawl");
//! if let Some(code) = server.installation_code() {
//!     println!("Install with:\n{code}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! session.md → load_source → SessionParser → RetrievalEngine → queries
//!     ↑                                           ↓
//! SourceWatcher ─────── reload ──────────→ EngineHandle → status
//! ```

pub mod config;
pub mod error;
pub mod handle;
pub mod retrieval;
pub mod source;
pub mod status;

pub use config::SessionConfig;
pub use error::{Result, RetrieverError};
pub use handle::EngineHandle;
pub use retrieval::engine::RetrievalEngine;
pub use retrieval::results::{
    ArchitectureResult, ServerResult, SubsectionSummary, TopicResult,
};
pub use retrieval::watcher::SourceWatcher;
pub use source::load_source;
pub use status::SessionStatus;
