//! Server lookup: detected servers first, then excerpts from MCP/server sections.

use super::results::{LIMITED_INFORMATION_NOTE, ServerResult, server_not_found_message};
use super::strategy::{Query, Strategy, run_chain};
use session_kb_parser::{Document, Section};

/// Lines returned from a section that mentions the server.
pub const EXCERPT_LINES: usize = 10;

/// Server stages in tie-break order.
pub const SERVER_CHAIN: &[Strategy<Query, ServerResult>] = &[
    Strategy {
        name: "known-server",
        run: known_server,
    },
    Strategy {
        name: "section-excerpt",
        run: section_excerpt,
    },
];

pub fn find_server(document: &Document, query: &Query) -> ServerResult {
    run_chain(SERVER_CHAIN, document, query).unwrap_or_else(|| ServerResult::NotFound {
        name: query.raw().to_string(),
        description: server_not_found_message(query.raw()),
        available_servers: document.server_names(),
    })
}

/// The first detected server whose name contains the query.
pub fn known_server(document: &Document, query: &Query) -> Option<ServerResult> {
    document
        .servers
        .iter()
        .find(|server| query.found_in(&server.name))
        .map(|server| ServerResult::Known {
            name: server.name.clone(),
            installation_code: server.installation_code.clone(),
            description: server.description.clone(),
        })
}

fn is_server_section(section: &Section) -> bool {
    let title = section.title.to_lowercase();
    title.contains("mcp") || title.contains("server")
}

/// Up to [`EXCERPT_LINES`] lines starting at the first line mentioning the query.
fn excerpt(body: &str, query: &Query) -> Option<String> {
    let start = query.first_matching_line(body)?;
    Some(
        body.split('\n')
            .skip(start)
            .take(EXCERPT_LINES)
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// An excerpt from the first MCP/server section (or one of its subsections)
/// whose body mentions the query.
pub fn section_excerpt(document: &Document, query: &Query) -> Option<ServerResult> {
    let limited = |description: String, section: &Section, subsection: Option<&Section>| {
        ServerResult::Excerpt {
            name: query.raw().to_string(),
            description,
            section: section.title.clone(),
            subsection: subsection.map(|s| s.title.clone()),
            note: LIMITED_INFORMATION_NOTE.to_string(),
        }
    };

    for section in document.sections.iter().filter(|s| is_server_section(s)) {
        if let Some(lines) = excerpt(&section.content, query) {
            return Some(limited(lines, section, None));
        }
        for sub in &section.subsections {
            if let Some(lines) = excerpt(&sub.content, query) {
                return Some(limited(lines, section, Some(sub)));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use session_kb_parser::parse_session;

    const DOC: &str = "\
# Tools
Context7 appears here but this is not a server section.
# MCP Servers
Intro line.
```bash
claude mcp add mcp-server-firecrawl npx -- -y firecrawl-mcp
```
## Context7
Line 1 about context7
Line 2
Line 3
Line 4
Line 5
Line 6
Line 7
Line 8
Line 9
Line 10
Line 11
# Linear server
Linear tracks issues.
";

    #[test]
    fn test_known_server_returns_installation_code() {
        let doc = parse_session(DOC);
        let result = find_server(&doc, &Query::new("fire"));
        assert_eq!(result.name(), "Firecrawl");
        assert_eq!(
            result.installation_code(),
            Some("claude mcp add mcp-server-firecrawl npx -- -y firecrawl-mcp\n")
        );
        assert!(result.is_match());
    }

    #[test]
    fn test_excerpt_from_subsection_is_ten_lines() {
        let doc = parse_session(DOC);
        assert!(known_server(&doc, &Query::new("context7")).is_none());

        let result = find_server(&doc, &Query::new("context7"));
        match result {
            ServerResult::Excerpt {
                name,
                description,
                section,
                subsection,
                note,
            } => {
                assert_eq!(name, "context7");
                assert_eq!(section, "MCP Servers");
                assert_eq!(subsection.as_deref(), Some("Context7"));
                assert_eq!(note, LIMITED_INFORMATION_NOTE);
                let lines: Vec<&str> = description.split('\n').collect();
                assert_eq!(lines.len(), EXCERPT_LINES);
                assert_eq!(lines[0], "Line 1 about context7");
                assert_eq!(lines[9], "Line 10");
            }
            other => panic!("expected excerpt, got {other:?}"),
        }
    }

    #[test]
    fn test_excerpt_from_section_body() {
        let doc = parse_session(DOC);
        let result = section_excerpt(&doc, &Query::new("LINEAR")).unwrap();
        assert_eq!(
            result,
            ServerResult::Excerpt {
                name: "LINEAR".into(),
                description: "Linear tracks issues.\n\n".into(),
                section: "Linear server".into(),
                subsection: None,
                note: LIMITED_INFORMATION_NOTE.into(),
            }
        );
    }

    #[test]
    fn test_not_found_lists_available_servers() {
        let doc = parse_session(DOC);
        let result = find_server(&doc, &Query::new("Slack"));
        assert_eq!(
            result,
            ServerResult::NotFound {
                name: "Slack".into(),
                description: server_not_found_message("Slack"),
                available_servers: vec!["Firecrawl".into()],
            }
        );
    }
}
