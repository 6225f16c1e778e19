//! Recognized server names used to turn code blocks into [`crate::ServerRef`]s.
//!
//! The vocabulary is data: callers pass whatever names their document talks
//! about and the parser matches them case-insensitively as literal text.

use regex::{Regex, RegexBuilder};

/// Server names recognized when no vocabulary is configured.
pub const DEFAULT_SERVER_NAMES: &[&str] = &["perplexity", "firecrawl", "agentql", "repomix"];

/// A set of server names compiled into a single case-insensitive matcher.
#[derive(Debug, Clone)]
pub struct ServerVocabulary {
    names: Vec<String>,
    matcher: Option<Regex>,
}

impl ServerVocabulary {
    /// Build a vocabulary from literal names. Blank names are ignored.
    ///
    /// # Examples
    /// ```
    /// use session_kb_parser::ServerVocabulary;
    ///
    /// let vocabulary = ServerVocabulary::new(["context7", "Linear"]);
    /// assert_eq!(vocabulary.find_in("npx -y @upstash/Context7-mcp"), Some("Context7"));
    /// assert_eq!(vocabulary.find_in("npx -y repomix"), None);
    /// ```
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        let matcher = if names.is_empty() {
            None
        } else {
            let alternation = names
                .iter()
                .map(|name| regex::escape(name))
                .collect::<Vec<_>>()
                .join("|");
            // Escaped literals joined by `|` always form a valid pattern.
            RegexBuilder::new(&alternation)
                .case_insensitive(true)
                .build()
                .ok()
        };

        Self { names, matcher }
    }

    /// The configured names, as given.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Leftmost vocabulary match in `text`, as spelled in `text`.
    pub fn find_in<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.matcher
            .as_ref()
            .and_then(|matcher| matcher.find(text))
            .map(|found| found.as_str())
    }
}

impl Default for ServerVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_NAMES)
    }
}

/// Display form of a matched server name: first character upper-case, the rest lower-case.
pub fn normalize_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_matches_case_insensitively() {
        let vocabulary = ServerVocabulary::default();
        assert_eq!(vocabulary.names().len(), 4);
        assert_eq!(
            vocabulary.find_in("claude mcp add mcp-server-firecrawl npx -- -y FIRECRAWL-mcp"),
            Some("firecrawl")
        );
        assert_eq!(vocabulary.find_in("claude mcp add AgentQL"), Some("AgentQL"));
        assert_eq!(vocabulary.find_in("nothing to see"), None);
    }

    #[test]
    fn test_leftmost_match_wins() {
        let vocabulary = ServerVocabulary::default();
        assert_eq!(
            vocabulary.find_in("repomix first, then perplexity"),
            Some("repomix")
        );
    }

    #[test]
    fn test_names_are_literal_text() {
        let vocabulary = ServerVocabulary::new(["a.b", "  ", "c+"]);
        assert_eq!(vocabulary.names(), &["a.b".to_string(), "c+".to_string()]);
        assert_eq!(vocabulary.find_in("axb"), None);
        assert_eq!(vocabulary.find_in("use A.B here"), Some("A.B"));
        assert_eq!(vocabulary.find_in("cc+"), Some("c+"));
    }

    #[test]
    fn test_empty_vocabulary_never_matches() {
        let vocabulary = ServerVocabulary::new(Vec::<String>::new());
        assert!(vocabulary.is_empty());
        assert_eq!(vocabulary.find_in("perplexity"), None);
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("firecrawl"), "Firecrawl");
        assert_eq!(normalize_name("AgentQL"), "Agentql");
        assert_eq!(normalize_name("REPOMIX"), "Repomix");
        assert_eq!(normalize_name(""), "");
    }
}
