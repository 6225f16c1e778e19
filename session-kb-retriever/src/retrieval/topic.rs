//! Topic lookup: exact title, partial title, subsection title, then body text.

use super::results::{
    SUGGESTED_TOPIC_LIMIT, SubsectionSummary, TopicResult, topic_not_found_message,
};
use super::strategy::{Query, Strategy, run_chain};
use session_kb_parser::{Document, Section};

/// Topic stages in tie-break order.
pub const TOPIC_CHAIN: &[Strategy<Query, TopicResult>] = &[
    Strategy {
        name: "exact-title",
        run: exact_title,
    },
    Strategy {
        name: "partial-title",
        run: partial_title,
    },
    Strategy {
        name: "subsection-title",
        run: subsection_title,
    },
    Strategy {
        name: "body-content",
        run: body_content,
    },
];

/// Look up `query`, always producing a renderable result.
pub fn find_topic(document: &Document, query: &Query) -> TopicResult {
    run_chain(TOPIC_CHAIN, document, query).unwrap_or_else(|| no_match(document, query))
}

fn summarize(section: &Section) -> Vec<SubsectionSummary> {
    section
        .subsections
        .iter()
        .map(|sub| SubsectionSummary::new(&sub.title, &sub.content))
        .collect()
}

/// A top-level section whose title equals the query.
pub fn exact_title(document: &Document, query: &Query) -> Option<TopicResult> {
    document
        .sections
        .iter()
        .find(|s| query.equals(&s.title))
        .map(|s| TopicResult::Exact {
            title: s.title.clone(),
            content: s.content.clone(),
            subsections: summarize(s),
        })
}

/// The first top-level section whose title contains the query.
pub fn partial_title(document: &Document, query: &Query) -> Option<TopicResult> {
    document
        .sections
        .iter()
        .find(|s| query.found_in(&s.title))
        .map(|s| TopicResult::Partial {
            title: s.title.clone(),
            content: s.content.clone(),
            subsections: summarize(s),
        })
}

/// The first subsection whose title contains the query.
pub fn subsection_title(document: &Document, query: &Query) -> Option<TopicResult> {
    document.sections.iter().find_map(|section| {
        section
            .subsections
            .iter()
            .find(|sub| query.found_in(&sub.title))
            .map(|sub| TopicResult::Subsection {
                title: sub.title.clone(),
                content: sub.content.clone(),
                parent_topic: section.title.clone(),
            })
    })
}

/// Lines mentioning the query from the first section body (or one of its
/// subsection bodies) that contains it.
pub fn body_content(document: &Document, query: &Query) -> Option<TopicResult> {
    for section in &document.sections {
        if query.found_in(&section.content) {
            return Some(TopicResult::Content {
                title: section.title.clone(),
                content: query.matching_lines(&section.content).join("\n"),
                full_section: section.title.clone(),
                subsection: None,
            });
        }

        if let Some(sub) = section
            .subsections
            .iter()
            .find(|sub| query.found_in(&sub.content))
        {
            return Some(TopicResult::Content {
                title: sub.title.clone(),
                content: query.matching_lines(&sub.content).join("\n"),
                full_section: section.title.clone(),
                subsection: Some(sub.title.clone()),
            });
        }
    }
    None
}

fn no_match(document: &Document, query: &Query) -> TopicResult {
    TopicResult::NoMatch {
        title: query.raw().to_string(),
        content: topic_not_found_message(query.raw()),
        suggested_topics: document
            .topics
            .iter()
            .take(SUGGESTED_TOPIC_LIMIT)
            .cloned()
            .collect(),
    }
}
