use anyhow::Result;
use session_kb_parser::SessionParser;
use session_kb_retriever::{
    ArchitectureResult, EngineHandle, RetrievalEngine, RetrieverError, ServerResult,
    SessionConfig, SessionStatus, TopicResult,
};
use std::fs;
use tempfile::tempdir;

const SESSION: &str = include_str!("../../fixtures/session-one.md");

fn engine() -> RetrievalEngine {
    RetrievalEngine::from_source(SESSION, &SessionParser::default())
}

#[test]
fn test_exact_title_lookup_returns_section_with_summaries() {
    let engine = engine();
    match engine.find_topic("mcp servers") {
        TopicResult::Exact {
            title,
            content,
            subsections,
        } => {
            assert_eq!(title, "MCP Servers");
            assert!(content.contains("Useful servers:"));
            assert_eq!(subsections.len(), 1);
            assert_eq!(subsections[0].title, "Context7");
            assert!(subsections[0].summary.ends_with("..."));
        }
        other => panic!("expected exact match, got {other:?}"),
    }
}

#[test]
fn test_partial_title_lookup() {
    let engine = engine();
    let result = engine.find_topic("Claude Code");
    assert_eq!(result.match_type(), "partial");
    assert_eq!(result.title(), "Claude Code Tips");
    if let TopicResult::Partial { subsections, .. } = result {
        let titles: Vec<&str> = subsections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Easily Reset Context",
                "CLAUDE.md configuration",
                "Division of Labor"
            ]
        );
        for summary in &subsections {
            assert!(summary.summary.chars().count() <= 103);
        }
    }
}

#[test]
fn test_subsection_and_body_lookups() {
    let engine = engine();
    assert_eq!(
        engine.find_topic("context7"),
        TopicResult::Subsection {
            title: "Context7".into(),
            content: "\nContext7 serves up-to-date library documentation to the model.\n\n".into(),
            parent_topic: "MCP Servers".into(),
        }
    );

    assert_eq!(
        engine.find_topic("obsidian"),
        TopicResult::Content {
            title: "Note Taking".into(),
            content: "Capture notes in an Obsidian compatible format.".into(),
            full_section: "Note Taking".into(),
            subsection: None,
        }
    );
}

#[test]
fn test_unknown_topic_suggests_first_topics() {
    let engine = engine();
    let result = engine.find_topic("Quantum Computing");
    assert!(!result.is_match());
    match result {
        TopicResult::NoMatch {
            suggested_topics, ..
        } => assert_eq!(suggested_topics, engine.list_topics()[..5].to_vec()),
        other => panic!("expected no match, got {other:?}"),
    }
}

#[test]
fn test_known_server_details() {
    let engine = engine();
    match engine.find_server("Firecrawl") {
        ServerResult::Known {
            name,
            installation_code,
            description,
        } => {
            assert_eq!(name, "Firecrawl");
            assert_eq!(
                installation_code,
                "claude mcp add mcp-server-firecrawl npx -- -y firecrawl-mcp\n"
            );
            assert!(description.contains("Firecrawl allows the model"));
        }
        other => panic!("expected known server, got {other:?}"),
    }
}

#[test]
fn test_undetected_server_falls_back_to_excerpt() {
    let engine = engine();
    match engine.find_server("Context7") {
        ServerResult::Excerpt {
            description,
            section,
            subsection,
            ..
        } => {
            assert_eq!(section, "MCP Servers");
            assert_eq!(subsection.as_deref(), Some("Context7"));
            assert!(description.starts_with("Context7 serves up-to-date"));
        }
        other => panic!("expected excerpt, got {other:?}"),
    }

    match engine.find_server("Slack") {
        ServerResult::NotFound {
            available_servers, ..
        } => assert_eq!(
            available_servers,
            vec!["Perplexity", "Firecrawl", "Agentql", "Repomix"]
        ),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn test_architecture_diagram() {
    let engine = engine();
    let result = engine.find_architecture();
    match &result {
        ArchitectureResult::Diagram {
            title,
            diagram_code,
            description,
        } => {
            assert_eq!(title, "Knowledge Architecture");
            assert!(diagram_code.starts_with("flowchart TD\n"));
            assert!(diagram_code.contains("F[Feedback & Evolution]"));
            assert!(description.contains("architecture diagram below"));
        }
        other => panic!("expected diagram, got {other:?}"),
    }

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["kind"], "diagram");
    assert!(json["diagramCode"].as_str().unwrap().contains("flowchart"));
}

#[test]
fn test_queries_are_repeatable() {
    let engine = engine();
    assert_eq!(engine.find_topic("note"), engine.find_topic("note"));
    assert_eq!(engine.find_server("repomix"), engine.find_server("repomix"));
    assert_eq!(engine.find_architecture(), engine.find_architecture());
}

#[test]
fn test_initialize_requires_a_document() -> Result<()> {
    let dir = tempdir()?;

    let missing = SessionConfig::new(dir.path().join("missing.md"));
    let err = RetrievalEngine::initialize(&missing).unwrap_err();
    assert!(matches!(err, RetrieverError::SourceUnavailable { .. }));

    let empty = dir.path().join("empty.md");
    fs::write(&empty, "\n\n   \n")?;
    let err = EngineHandle::initialize(&SessionConfig::new(&empty)).unwrap_err();
    assert!(err.is_source_unavailable());
    Ok(())
}

#[test]
fn test_config_file_drives_initialization_and_reload() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("session.md"), SESSION)?;
    let config_path = dir.path().join("session.toml");
    fs::write(
        &config_path,
        "source_path = \"session.md\"\nservers = [\"firecrawl\", \"context7\"]\n",
    )?;

    let config = SessionConfig::load(&config_path)?;
    let handle = EngineHandle::initialize(&config)?;
    assert_eq!(
        handle.current().document().server_names(),
        vec!["Firecrawl"]
    );

    let updated = format!("{SESSION}\n# Retrospective\nWhat went well.\n");
    fs::write(dir.path().join("session.md"), updated)?;
    assert_eq!(handle.reload(&config)?, 1);

    let status = SessionStatus::from_handle(&handle);
    assert_eq!(status.title, "AI Knowledge Sharing Session");
    assert_eq!(status.topics, 9);
    assert_eq!(status.sections, 5);
    assert_eq!(status.subsections, 4);
    assert_eq!(status.code_blocks, 6);
    assert_eq!(status.generation, 1);
    assert_eq!(
        handle.current().find_topic("retrospective").title(),
        "Retrospective"
    );
    Ok(())
}
