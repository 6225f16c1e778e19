use clap::Parser;
use session_kb_parser::{ServerVocabulary, SessionParser};
use std::fs;
use std::io::{self, Read};

/// A CLI tool to parse a knowledge-session document into JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the session document. If not provided, reads from stdin.
    #[arg(short, long)]
    input: Option<String>,

    /// Recognized server name. Repeat to build a custom vocabulary.
    /// Defaults to perplexity, firecrawl, agentql and repomix.
    #[arg(short, long = "server")]
    servers: Vec<String>,

    /// Print single-line JSON instead of pretty output.
    #[arg(short, long)]
    compact: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let raw = if let Some(input_path) = args.input {
        fs::read_to_string(input_path)?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let vocabulary = if args.servers.is_empty() {
        ServerVocabulary::default()
    } else {
        ServerVocabulary::new(&args.servers)
    };

    let document = SessionParser::new(vocabulary).parse(&raw);

    let json_output = if args.compact {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };
    println!("{json_output}");

    Ok(())
}
