use rmcp::ServerHandler;
use session_kb_mcp::tools::{
    architecture::show_architecture_diagram,
    prompt::system_prompt,
    server_details::{ServerDetailsRequest, get_mcp_server_details},
    status::status,
    topic::{TopicRequest, get_topic_information},
    topics::list_available_topics,
};
use session_kb_mcp::{ServerConfig, SessionMcpServer, run_server};
use session_kb_retriever::{EngineHandle, SessionConfig};
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

const SESSION: &str = include_str!("../../fixtures/session-one.md");

fn json(answer: Result<String, String>) -> serde_json::Value {
    serde_json::from_str(&answer.expect("tool failed")).expect("tool answered invalid JSON")
}

#[test]
fn test_tools_answer_from_fixture() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("session.md");
    fs::write(&path, SESSION)?;
    let handle = EngineHandle::initialize(&SessionConfig::new(&path))?;
    let engine = handle.current();

    let topic = json(get_topic_information(
        &engine,
        TopicRequest {
            topic: "Knowledge Architecture".into(),
        },
    ));
    assert_eq!(topic["matchType"], "exact");

    let server = json(get_mcp_server_details(
        &engine,
        ServerDetailsRequest {
            server_name: "AgentQL".into(),
        },
    ));
    assert_eq!(server["kind"], "known");
    assert_eq!(server["name"], "Agentql");

    let diagram = json(show_architecture_diagram(&engine));
    assert_eq!(diagram["title"], "Knowledge Architecture");

    let topics = json(list_available_topics(&engine));
    assert_eq!(topics.as_array().map(Vec::len), Some(8));

    let report = json(status(&handle));
    assert_eq!(report["title"], "AI Knowledge Sharing Session");
    assert_eq!(report["servers"].as_array().map(Vec::len), Some(4));

    let prompt = system_prompt(&engine);
    assert!(prompt.contains("- MCP Servers"));
    assert!(prompt.contains("claude mcp add repomix"));
    Ok(())
}

#[test]
fn test_server_advertises_tools() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("session.md");
    fs::write(&path, SESSION)?;
    let handle = Arc::new(EngineHandle::initialize(&SessionConfig::new(&path))?);

    let info = SessionMcpServer::new(handle).get_info();
    assert!(info.capabilities.tools.is_some());
    assert!(info.instructions.is_some());
    Ok(())
}

#[tokio::test]
async fn test_missing_source_stops_startup() {
    let dir = tempdir().unwrap();
    let config = ServerConfig::new(SessionConfig::new(dir.path().join("missing.md")));

    let err = run_server(config).await.unwrap_err();
    assert!(err.to_string().contains("Session source unavailable"));
}
