//! # session-kb-parser
//!
//! Turns a knowledge-session document (a markdown-like file with a `---`
//! header block, `#`/`##` headings and fenced code blocks) into a structured
//! [`Document`] that the retrieval engine can query.
//!
//! ```
//! use session_kb_parser::{ServerVocabulary, SessionParser};
//!
//! let raw = "# MCP Servers\n```bash\nclaude mcp add repomix npx -- -y repomix --mcp\n```\n";
//! let parser = SessionParser::new(ServerVocabulary::default());
//! let doc = parser.parse(raw);
//!
//! assert_eq!(doc.code_blocks.len(), 1);
//! assert_eq!(doc.servers[0].name, "Repomix");
//! ```

pub mod document;
pub mod parser;
pub mod vocabulary;

pub use document::{
    CodeBlock, Document, HeadingLevel, NO_DESCRIPTION, ROOT_PARENT, Section, ServerRef,
    UNKNOWN_SECTION,
};
pub use parser::{SessionParser, parse_session};
pub use vocabulary::{DEFAULT_SERVER_NAMES, ServerVocabulary, normalize_name};
