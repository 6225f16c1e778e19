use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use session_kb_mcp::{ServerConfig, run_server};
use session_kb_retriever::SessionConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("session-kb-mcp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Knowledge-session Model Context Protocol server")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_name("FILE")
                .help("Session document to serve (overrides the configured source)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("watch")
                .short('w')
                .long("watch")
                .help("Reload the document when it changes on disk")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = matches.get_one::<PathBuf>("config");
    let source = matches.get_one::<PathBuf>("source");

    let mut session = match (config, source) {
        (Some(path), _) => SessionConfig::load(path)?,
        (None, Some(source)) => SessionConfig::new(source),
        (None, None) => anyhow::bail!("either --config or --source is required"),
    };
    if let Some(source) = source {
        session.source_path = source.clone();
    }
    if matches.get_flag("watch") {
        session.watch = true;
    }

    run_server(ServerConfig::new(session)).await
}
