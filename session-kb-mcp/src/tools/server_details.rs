use super::{require_non_blank, to_json};
use rmcp::schemars;
use serde::Deserialize;
use session_kb_retriever::RetrievalEngine;
use tracing::info;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ServerDetailsRequest {
    #[schemars(description = "Name of the MCP server, e.g. 'Firecrawl' or 'Repomix'")]
    pub server_name: String,
}

pub fn get_mcp_server_details(
    engine: &RetrievalEngine,
    request: ServerDetailsRequest,
) -> Result<String, String> {
    let name = require_non_blank("server_name", &request.server_name)?;
    info!("Processing MCP server request: '{}'", name);
    to_json(&engine.find_server(name))
}
