use crate::tools::{
    self, server_details::ServerDetailsRequest, topic::TopicRequest,
};
use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use session_kb_retriever::EngineHandle;
use std::sync::Arc;
use tokio::io::{stdin, stdout};
use tracing::info;

/// MCP server answering questions about one knowledge-session document
#[derive(Clone)]
pub struct SessionMcpServer {
    handle: Arc<EngineHandle>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SessionMcpServer {
    pub fn new(handle: Arc<EngineHandle>) -> Self {
        Self {
            handle,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get information about a topic from the session, such as Claude Code, MCP servers, note taking or knowledge architecture"
    )]
    async fn get_topic_information(
        &self,
        Parameters(request): Parameters<TopicRequest>,
    ) -> Result<String, String> {
        tools::topic::get_topic_information(&self.handle.current(), request)
    }

    #[tool(
        description = "Get installation details and a description for an MCP server mentioned in the session"
    )]
    async fn get_mcp_server_details(
        &self,
        Parameters(request): Parameters<ServerDetailsRequest>,
    ) -> Result<String, String> {
        tools::server_details::get_mcp_server_details(&self.handle.current(), request)
    }

    #[tool(description = "Show the knowledge architecture diagram from the session")]
    async fn show_architecture_diagram(&self) -> Result<String, String> {
        tools::architecture::show_architecture_diagram(&self.handle.current())
    }

    #[tool(description = "List every topic covered in the session")]
    async fn list_available_topics(&self) -> Result<String, String> {
        tools::topics::list_available_topics(&self.handle.current())
    }

    #[tool(description = "Show which session document is loaded and when it was last reloaded")]
    async fn status(&self) -> Result<String, String> {
        tools::status::status(&self.handle)
    }

    #[tool(description = "Get the assistant system prompt built from the session content")]
    async fn system_prompt(&self) -> String {
        tools::prompt::system_prompt(&self.handle.current())
    }

    /// Serve the MCP server using stdio transport
    pub async fn serve_stdio(self) -> Result<()> {
        info!("Starting MCP server with stdio transport");

        let server = self.serve((stdin(), stdout())).await?;
        let quit_reason = server.waiting().await?;

        info!("MCP server quit: {:?}", quit_reason);
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for SessionMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Knowledge-session MCP server - answers questions about topics, MCP servers and the architecture diagram of a shared session document".into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
