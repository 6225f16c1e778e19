//! The structured result of parsing a knowledge-session document.
//!
//! A [`Document`] is built once by [`crate::parser::SessionParser`] and is
//! read-only afterwards. Its JSON form (camelCase keys) is what UI panels and
//! tool callers receive, so field names here double as the wire format.

use serde::{Deserialize, Serialize};

/// Section title stamped on code blocks opened before any heading.
pub const UNKNOWN_SECTION: &str = "Unknown";

/// Parent recorded on depth-2 sections that have no depth-1 heading above them.
pub const ROOT_PARENT: &str = "Root";

/// Description given to a server that no section mentions.
pub const NO_DESCRIPTION: &str = "No description available";

/// Heading depth recognized by the parser. Deeper headings are plain content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HeadingLevel {
    One,
    Two,
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::One => 1,
            HeadingLevel::Two => 2,
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HeadingLevel::One),
            2 => Ok(HeadingLevel::Two),
            other => Err(format!("Unsupported heading level: {other}")),
        }
    }
}

/// Root parse result for one session document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Value of the `title:` key in the header block, quotes removed.
    pub title: String,
    /// Value of the `date:` key in the header block.
    pub date: String,
    /// Every heading title in first-seen order, without duplicates.
    pub topics: Vec<String>,
    /// Depth-1 sections, plus synthetic entries for orphaned depth-2 headings.
    pub sections: Vec<Section>,
    /// Closed fenced blocks in closing order.
    pub code_blocks: Vec<CodeBlock>,
    /// Recognized servers, one per qualifying code block.
    pub servers: Vec<ServerRef>,
}

impl Document {
    /// True when the document carries no headings, code blocks or header values.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.date.is_empty()
            && self.sections.is_empty()
            && self.code_blocks.is_empty()
    }

    /// Number of sections including nested subsections.
    pub fn section_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| 1 + section.subsections.len())
            .sum()
    }

    /// Names of every detected server, in discovery order.
    pub fn server_names(&self) -> Vec<String> {
        self.servers.iter().map(|s| s.name.clone()).collect()
    }
}

/// A titled span of content at heading depth 1 or 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub level: HeadingLevel,
    pub title: String,
    /// Body lines, each terminated by `\n`. Never holds headings or fence lines.
    pub content: String,
    /// Always empty for depth-2 sections.
    #[serde(default)]
    pub subsections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Section {
    pub(crate) fn top_level(title: String) -> Self {
        Self {
            level: HeadingLevel::One,
            title,
            content: String::new(),
            subsections: Vec::new(),
            parent: None,
        }
    }

    pub(crate) fn nested(title: String, parent: String) -> Self {
        Self {
            level: HeadingLevel::Two,
            title,
            content: String::new(),
            subsections: Vec::new(),
            parent: Some(parent),
        }
    }

    /// A depth-2 heading that appeared without a depth-1 section to attach to.
    pub fn is_synthetic(&self) -> bool {
        self.parent.as_deref() == Some(ROOT_PARENT)
    }
}

/// A fenced literal block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlock {
    /// Text after the opening fence, trimmed. May be empty.
    pub language: String,
    /// Lines between the fences, each terminated by `\n`.
    pub content: String,
    /// Title of the section open when the block started, or [`UNKNOWN_SECTION`].
    pub section: String,
}

/// A recognized external server mentioned by a code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRef {
    pub name: String,
    /// Full content of the code block the name was found in.
    pub installation_code: String,
    /// Title of the section holding the block.
    pub section: String,
    pub description: String,
}
