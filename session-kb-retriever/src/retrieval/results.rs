//! Result values returned by retrieval queries.
//!
//! Every query is total: a miss is a variant carrying something the caller can
//! still render (a message, suggested topics, known server names).

use serde::{Deserialize, Serialize};

/// Number of characters kept from a subsection body in summaries.
pub const SUMMARY_CHARS: usize = 100;

/// Maximum number of topics suggested after a failed topic lookup.
pub const SUGGESTED_TOPIC_LIMIT: usize = 5;

pub const LIMITED_INFORMATION_NOTE: &str = "Limited information available";
pub const DIAGRAM_CODE_NOT_FOUND_NOTE: &str =
    "Diagram code not found but architecture is described in this section";
pub const LOOSE_DIAGRAM_NOTE: &str = "Found diagram code but no specific architecture section";
pub const ARCHITECTURE_TITLE: &str = "Architecture Diagram";
pub const ARCHITECTURE_NOT_FOUND: &str =
    "No architecture diagram information found in the session content.";

pub fn topic_not_found_message(topic: &str) -> String {
    format!("No information found about \"{topic}\" in the session content.")
}

pub fn server_not_found_message(name: &str) -> String {
    format!("No information found about \"{name}\" MCP server.")
}

/// Title and shortened body of a subsection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsectionSummary {
    pub title: String,
    pub summary: String,
}

impl SubsectionSummary {
    /// First [`SUMMARY_CHARS`] characters of `content`, always followed by `...`.
    pub fn new(title: &str, content: &str) -> Self {
        let mut summary: String = content.chars().take(SUMMARY_CHARS).collect();
        summary.push_str("...");
        Self {
            title: title.to_string(),
            summary,
        }
    }
}

/// Outcome of a topic lookup, tagged by the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "matchType",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum TopicResult {
    /// A top-level section title equal to the query
    Exact {
        title: String,
        content: String,
        subsections: Vec<SubsectionSummary>,
    },
    /// A top-level section title containing the query
    Partial {
        title: String,
        content: String,
        subsections: Vec<SubsectionSummary>,
    },
    /// A subsection title containing the query
    Subsection {
        title: String,
        content: String,
        parent_topic: String,
    },
    /// Body lines mentioning the query
    Content {
        title: String,
        content: String,
        full_section: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subsection: Option<String>,
    },
    #[serde(rename = "none")]
    NoMatch {
        title: String,
        content: String,
        suggested_topics: Vec<String>,
    },
}

impl TopicResult {
    pub fn title(&self) -> &str {
        match self {
            TopicResult::Exact { title, .. }
            | TopicResult::Partial { title, .. }
            | TopicResult::Subsection { title, .. }
            | TopicResult::Content { title, .. }
            | TopicResult::NoMatch { title, .. } => title,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            TopicResult::Exact { content, .. }
            | TopicResult::Partial { content, .. }
            | TopicResult::Subsection { content, .. }
            | TopicResult::Content { content, .. }
            | TopicResult::NoMatch { content, .. } => content,
        }
    }

    /// The wire tag, e.g. `"content"` or `"none"`.
    pub fn match_type(&self) -> &'static str {
        match self {
            TopicResult::Exact { .. } => "exact",
            TopicResult::Partial { .. } => "partial",
            TopicResult::Subsection { .. } => "subsection",
            TopicResult::Content { .. } => "content",
            TopicResult::NoMatch { .. } => "none",
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, TopicResult::NoMatch { .. })
    }
}

/// Outcome of a server lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerResult {
    /// A server detected while parsing
    Known {
        name: String,
        installation_code: String,
        description: String,
    },
    /// Lines from an MCP/server section that mention the name
    Excerpt {
        name: String,
        description: String,
        section: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subsection: Option<String>,
        note: String,
    },
    NotFound {
        name: String,
        description: String,
        available_servers: Vec<String>,
    },
}

impl ServerResult {
    pub fn name(&self) -> &str {
        match self {
            ServerResult::Known { name, .. }
            | ServerResult::Excerpt { name, .. }
            | ServerResult::NotFound { name, .. } => name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ServerResult::Known { description, .. }
            | ServerResult::Excerpt { description, .. }
            | ServerResult::NotFound { description, .. } => description,
        }
    }

    pub fn installation_code(&self) -> Option<&str> {
        match self {
            ServerResult::Known {
                installation_code, ..
            } => Some(installation_code),
            _ => None,
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, ServerResult::NotFound { .. })
    }
}

/// Outcome of an architecture lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ArchitectureResult {
    /// An architecture section together with its diagram block
    Diagram {
        title: String,
        diagram_code: String,
        description: String,
    },
    /// An architecture section without a diagram block
    SectionOnly {
        title: String,
        description: String,
        note: String,
    },
    /// A diagram block found outside any architecture section
    LooseDiagram {
        title: String,
        diagram_code: String,
        note: String,
    },
    NotFound { title: String, description: String },
}

impl ArchitectureResult {
    pub fn title(&self) -> &str {
        match self {
            ArchitectureResult::Diagram { title, .. }
            | ArchitectureResult::SectionOnly { title, .. }
            | ArchitectureResult::LooseDiagram { title, .. }
            | ArchitectureResult::NotFound { title, .. } => title,
        }
    }

    pub fn diagram_code(&self) -> Option<&str> {
        match self {
            ArchitectureResult::Diagram { diagram_code, .. }
            | ArchitectureResult::LooseDiagram { diagram_code, .. } => Some(diagram_code),
            _ => None,
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, ArchitectureResult::NotFound { .. })
    }
}
