//! Ordered fallback chains.
//!
//! A lookup is a fixed list of named stages tried in order; the first stage
//! that returns `Some` wins. Keeping the list as data makes the tie-break
//! order readable in one place and lets each stage be tested on its own.

use session_kb_parser::Document;
use tracing::{debug, trace};

/// One stage of a fallback chain.
pub struct Strategy<I: ?Sized, R> {
    pub name: &'static str,
    pub run: fn(&Document, &I) -> Option<R>,
}

/// Run `chain` in order and return the first hit.
pub fn run_chain<I: ?Sized, R>(
    chain: &[Strategy<I, R>],
    document: &Document,
    input: &I,
) -> Option<R> {
    chain.iter().find_map(|strategy| {
        let result = (strategy.run)(document, input);
        match result {
            Some(_) => debug!("Stage '{}' matched", strategy.name),
            None => trace!("Stage '{}' had no match", strategy.name),
        }
        result
    })
}

/// A lookup string with its case-folded form computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    folded: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            folded: raw.to_lowercase(),
        }
    }

    /// The query as the caller wrote it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True when `text` contains the query, ignoring case.
    pub fn found_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.folded)
    }

    /// True when `text` equals the query, ignoring case.
    pub fn equals(&self, text: &str) -> bool {
        text.to_lowercase() == self.folded
    }

    /// Lines of `text` that contain the query, in order.
    pub fn matching_lines<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split('\n').filter(|line| self.found_in(line)).collect()
    }

    /// Index of the first line of `text` containing the query.
    pub fn first_matching_line(&self, text: &str) -> Option<usize> {
        text.split('\n').position(|line| self.found_in(line))
    }
}
