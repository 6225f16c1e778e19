//! Architecture lookup: a section about architecture and its diagram, or any
//! diagram block when no such section exists.

use super::results::{
    ARCHITECTURE_NOT_FOUND, ARCHITECTURE_TITLE, ArchitectureResult, DIAGRAM_CODE_NOT_FOUND_NOTE,
    LOOSE_DIAGRAM_NOTE,
};
use super::strategy::{Strategy, run_chain};
use session_kb_parser::{CodeBlock, Document, Section};

const MERMAID: &str = "mermaid";
const MERMAID_CALL: &str = "mermaid(";

/// Architecture stages in tie-break order.
pub const ARCHITECTURE_CHAIN: &[Strategy<(), ArchitectureResult>] = &[
    Strategy {
        name: "architecture-section",
        run: architecture_section,
    },
    Strategy {
        name: "loose-diagram",
        run: loose_diagram,
    },
];

pub fn find_architecture(document: &Document) -> ArchitectureResult {
    run_chain(ARCHITECTURE_CHAIN, document, &()).unwrap_or_else(|| ArchitectureResult::NotFound {
        title: ARCHITECTURE_TITLE.to_string(),
        description: ARCHITECTURE_NOT_FOUND.to_string(),
    })
}

fn is_mermaid(block: &CodeBlock) -> bool {
    block.language.eq_ignore_ascii_case(MERMAID)
}

fn describes_architecture(section: &Section) -> bool {
    section.title.to_lowercase().contains("architecture")
        || section.content.to_lowercase().contains("architecture diagram")
}

/// The first section about architecture, with its diagram block when it has one.
pub fn architecture_section(document: &Document, _: &()) -> Option<ArchitectureResult> {
    let section = document.sections.iter().find(|s| describes_architecture(s))?;

    let diagram = document.code_blocks.iter().find(|block| {
        block.section == section.title
            && (is_mermaid(block) || section.content.contains(MERMAID_CALL))
    });

    Some(match diagram {
        Some(block) => ArchitectureResult::Diagram {
            title: section.title.clone(),
            diagram_code: block.content.clone(),
            description: section.content.clone(),
        },
        None => ArchitectureResult::SectionOnly {
            title: section.title.clone(),
            description: section.content.clone(),
            note: DIAGRAM_CODE_NOT_FOUND_NOTE.to_string(),
        },
    })
}

/// The first mermaid or flowchart block anywhere in the document.
pub fn loose_diagram(document: &Document, _: &()) -> Option<ArchitectureResult> {
    document
        .code_blocks
        .iter()
        .find(|block| is_mermaid(block) || block.content.to_lowercase().contains("flowchart"))
        .map(|block| ArchitectureResult::LooseDiagram {
            title: ARCHITECTURE_TITLE.to_string(),
            diagram_code: block.content.clone(),
            note: LOOSE_DIAGRAM_NOTE.to_string(),
        })
}
