//! Tool implementations for the session MCP server
//!
//! Each tool is a plain function over a [`RetrievalEngine`] or
//! [`EngineHandle`](session_kb_retriever::EngineHandle) so it can be exercised
//! without a protocol client. Tools answer with pretty-printed JSON.

pub mod architecture;
pub mod prompt;
pub mod server_details;
pub mod status;
pub mod topic;
pub mod topics;

use serde::Serialize;

/// Serialize a tool answer.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize result: {e}"))
}

/// Trim `value`, rejecting it when nothing is left.
pub(crate) fn require_non_blank<'a>(field: &str, value: &'a str) -> Result<&'a str, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("'{field}' must not be empty"))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_blank() {
        assert_eq!(require_non_blank("topic", "  MCP "), Ok("MCP"));
        assert_eq!(
            require_non_blank("topic", " \t\n"),
            Err("'topic' must not be empty".to_string())
        );
    }
}
