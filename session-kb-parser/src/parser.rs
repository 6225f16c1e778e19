//! Single-pass line scanner that turns session text into a [`Document`].
//!
//! The scanner looks at one line at a time and applies the first rule that
//! fits, in this order:
//!
//! 1. `---` on its own toggles the header block; `title:` and `date:` lines
//!    inside it fill the document fields and everything else there is dropped.
//! 2. A line starting with three backticks opens a code block, or closes the
//!    open one. Fences never nest.
//! 3. Any other line inside an open block becomes block content.
//! 4. `# ` starts a depth-1 section.
//! 5. `## ` starts a subsection of the open depth-1 section, or a synthetic
//!    top-level entry with parent [`ROOT_PARENT`] when there is none.
//! 6. Anything else is appended to the open section, if any.
//!
//! A block still open when input ends is dropped, and text before the first
//! heading is discarded.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::document::{
    CodeBlock, Document, HeadingLevel, NO_DESCRIPTION, ROOT_PARENT, Section, ServerRef,
    UNKNOWN_SECTION,
};
use crate::vocabulary::{ServerVocabulary, normalize_name};

const HEADER_DELIMITER: &str = "---";
const FENCE: &str = "```";
const TITLE_KEY: &str = "title:";
const DATE_KEY: &str = "date:";
const H1_PREFIX: &str = "# ";
const H2_PREFIX: &str = "## ";

/// Parses session documents, detecting servers from a configurable vocabulary.
#[derive(Debug, Clone, Default)]
pub struct SessionParser {
    vocabulary: ServerVocabulary,
}

/// Parse with the default server vocabulary.
pub fn parse_session(raw: &str) -> Document {
    SessionParser::default().parse(raw)
}

/// Where body text currently goes, as indices into `Document::sections`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    None,
    Section(usize),
    Subsection(usize, usize),
}

impl Cursor {
    fn resolve<'a>(&self, sections: &'a [Section]) -> Option<&'a Section> {
        match *self {
            Cursor::None => None,
            Cursor::Section(i) => sections.get(i),
            Cursor::Subsection(i, j) => sections.get(i).and_then(|s| s.subsections.get(j)),
        }
    }

    fn resolve_mut<'a>(&self, sections: &'a mut [Section]) -> Option<&'a mut Section> {
        match *self {
            Cursor::None => None,
            Cursor::Section(i) => sections.get_mut(i),
            Cursor::Subsection(i, j) => sections
                .get_mut(i)
                .and_then(|s| s.subsections.get_mut(j)),
        }
    }
}

#[derive(Debug)]
struct ScanState {
    in_header: bool,
    cursor: Cursor,
    open_block: Option<CodeBlock>,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            in_header: false,
            cursor: Cursor::None,
            open_block: None,
        }
    }
}

impl SessionParser {
    pub fn new(vocabulary: ServerVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &ServerVocabulary {
        &self.vocabulary
    }

    /// Parse `raw` into a [`Document`]. Never fails and performs no I/O.
    ///
    /// # Examples
    /// ```
    /// use session_kb_parser::SessionParser;
    ///
    /// let raw = "---\ntitle: \"Demo\"\n---\n# Intro\nHello\n## Detail\nMore\n";
    /// let doc = SessionParser::default().parse(raw);
    ///
    /// assert_eq!(doc.title, "Demo");
    /// assert_eq!(doc.topics, vec!["Intro", "Detail"]);
    /// assert_eq!(doc.sections[0].content, "Hello\n");
    /// assert_eq!(doc.sections[0].subsections[0].content, "More\n\n");
    /// ```
    pub fn parse(&self, raw: &str) -> Document {
        let mut doc = Document::default();
        let mut state = ScanState::default();

        for line in raw.split('\n') {
            self.scan_line(&mut doc, &mut state, line);
        }

        if let Some(block) = state.open_block {
            debug!(
                "Dropping unterminated code block opened in section '{}'",
                block.section
            );
        }

        dedupe_topics(&mut doc.topics);
        describe_servers(&mut doc);

        debug!(
            "Parsed session '{}': {} sections, {} code blocks, {} servers",
            doc.title,
            doc.section_count(),
            doc.code_blocks.len(),
            doc.servers.len()
        );
        doc
    }

    fn scan_line(&self, doc: &mut Document, state: &mut ScanState, line: &str) {
        if line.trim() == HEADER_DELIMITER {
            state.in_header = !state.in_header;
            return;
        }

        if state.in_header {
            read_header_line(doc, line);
            return;
        }

        if let Some(rest) = line.strip_prefix(FENCE) {
            match state.open_block.take() {
                None => {
                    let section = state
                        .cursor
                        .resolve(&doc.sections)
                        .map_or(UNKNOWN_SECTION, |s| s.title.as_str())
                        .to_string();
                    trace!("Opening code block in section '{}'", section);
                    state.open_block = Some(CodeBlock {
                        language: rest.trim().to_string(),
                        content: String::new(),
                        section,
                    });
                }
                Some(block) => self.close_block(doc, state.cursor, block),
            }
            return;
        }

        if let Some(block) = state.open_block.as_mut() {
            block.content.push_str(line);
            block.content.push('\n');
            return;
        }

        if let Some(title) = line.strip_prefix(H1_PREFIX) {
            let title = title.trim().to_string();
            doc.topics.push(title.clone());
            doc.sections.push(Section::top_level(title));
            state.cursor = Cursor::Section(doc.sections.len() - 1);
            return;
        }

        if let Some(title) = line.strip_prefix(H2_PREFIX) {
            let title = title.trim().to_string();
            doc.topics.push(title.clone());
            state.cursor = match state.cursor {
                Cursor::Section(i) if doc.sections[i].level == HeadingLevel::One => {
                    let parent = &mut doc.sections[i];
                    let nested = Section::nested(title, parent.title.clone());
                    parent.subsections.push(nested);
                    Cursor::Subsection(i, parent.subsections.len() - 1)
                }
                _ => {
                    doc.sections
                        .push(Section::nested(title, ROOT_PARENT.to_string()));
                    Cursor::Section(doc.sections.len() - 1)
                }
            };
            return;
        }

        if let Some(section) = state.cursor.resolve_mut(&mut doc.sections) {
            section.content.push_str(line);
            section.content.push('\n');
        }
    }

    fn close_block(&self, doc: &mut Document, cursor: Cursor, block: CodeBlock) {
        if let Some(section) = cursor.resolve(&doc.sections) {
            let title = section.title.to_lowercase();
            if title.contains("mcp") || title.contains("server") {
                if let Some(found) = self.vocabulary.find_in(&block.content) {
                    trace!("Found server '{}' in section '{}'", found, section.title);
                    doc.servers.push(ServerRef {
                        name: found.to_string(),
                        installation_code: block.content.clone(),
                        section: section.title.clone(),
                        description: String::new(),
                    });
                }
            }
        }
        doc.code_blocks.push(block);
    }
}

fn read_header_line(doc: &mut Document, line: &str) {
    if let Some(value) = line.strip_prefix(TITLE_KEY) {
        doc.title = value.trim().replace('"', "");
    } else if let Some(value) = line.strip_prefix(DATE_KEY) {
        doc.date = value.trim().to_string();
    }
}

fn dedupe_topics(topics: &mut Vec<String>) {
    let mut seen = HashSet::new();
    topics.retain(|topic| seen.insert(topic.clone()));
}

/// Normalize server names and borrow a description from the first top-level
/// section that mentions the server.
fn describe_servers(doc: &mut Document) {
    let Document {
        sections, servers, ..
    } = doc;

    for server in servers.iter_mut() {
        server.name = normalize_name(&server.name);
        let needle = server.name.to_lowercase();
        server.description = sections
            .iter()
            .find(|s| {
                s.title.to_lowercase().contains(&needle) || s.content.to_lowercase().contains(&needle)
            })
            .map_or_else(|| NO_DESCRIPTION.to_string(), |s| s.content.clone());
    }
}
