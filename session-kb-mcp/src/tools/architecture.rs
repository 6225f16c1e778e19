use super::to_json;
use session_kb_retriever::RetrievalEngine;
use tracing::info;

pub fn show_architecture_diagram(engine: &RetrievalEngine) -> Result<String, String> {
    info!("Processing architecture diagram request");
    to_json(&engine.find_architecture())
}
