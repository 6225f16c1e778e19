//! Prompt text for a conversational assistant, and the speech length cap.

use session_kb_retriever::RetrievalEngine;
use tracing::warn;

/// Longest text, in characters, handed to speech synthesis.
pub const SPEECH_CHAR_LIMIT: usize = 4000;

/// Build the assistant system prompt: the topic list followed by the full
/// session text.
pub fn system_prompt(engine: &RetrievalEngine) -> String {
    let topics = engine
        .list_topics()
        .iter()
        .map(|topic| format!("- {topic}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an AI Knowledge Sharing Assistant.\n\
        \n\
        The session covers these topics:\n\
        {topics}\n\
        \n\
        Below is the full content of the session:\n\
        \n\
        {raw}\n\
        \n\
        IMPORTANT INSTRUCTIONS:\n\
        1. Use the session content above as your primary knowledge source.\n\
        2. Be concise but thorough, citing specific sections when relevant.\n\
        3. If a question is not covered by the session, say so and suggest related topics that are.\n\
        4. Use the available tools for details about specific topics, MCP servers and the architecture diagram.\n",
        raw = engine.raw_source().trim_end()
    )
}

/// Keep at most [`SPEECH_CHAR_LIMIT`] characters of `text`.
pub fn truncate_for_speech(text: &str) -> String {
    match text.char_indices().nth(SPEECH_CHAR_LIMIT) {
        Some((cut, _)) => {
            warn!(
                "Text exceeds {} characters, trimming for speech",
                SPEECH_CHAR_LIMIT
            );
            text[..cut].to_string()
        }
        None => text.to_string(),
    }
}
