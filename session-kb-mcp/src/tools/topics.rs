use super::to_json;
use session_kb_retriever::RetrievalEngine;

pub fn list_available_topics(engine: &RetrievalEngine) -> Result<String, String> {
    to_json(engine.list_topics())
}
