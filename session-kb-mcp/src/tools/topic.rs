use super::{require_non_blank, to_json};
use rmcp::schemars;
use serde::Deserialize;
use session_kb_retriever::RetrievalEngine;
use tracing::info;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TopicRequest {
    #[schemars(description = "Topic to look up, e.g. 'Claude Code' or 'note taking'")]
    pub topic: String,
}

pub fn get_topic_information(
    engine: &RetrievalEngine,
    request: TopicRequest,
) -> Result<String, String> {
    let topic = require_non_blank("topic", &request.topic)?;
    info!("Processing topic request: '{}'", topic);

    let result = engine.find_topic(topic);
    info!(
        "Topic '{}' resolved as {} match '{}'",
        topic,
        result.match_type(),
        result.title()
    );
    to_json(&result)
}
