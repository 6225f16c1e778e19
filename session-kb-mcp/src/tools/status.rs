use super::to_json;
use serde::Serialize;
use session_kb_retriever::{EngineHandle, SessionStatus};
use tracing::info;

#[derive(Debug, Serialize)]
struct StatusReport {
    server_version: &'static str,
    #[serde(flatten)]
    session: SessionStatus,
}

pub fn status(handle: &EngineHandle) -> Result<String, String> {
    info!("Processing status request");
    to_json(&StatusReport {
        server_version: env!("CARGO_PKG_VERSION"),
        session: SessionStatus::from_handle(handle),
    })
}
