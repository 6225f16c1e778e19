use clap::{Parser, Subcommand};
use session_kb_retriever::{
    ArchitectureResult, EngineHandle, ServerResult, SessionConfig, SessionStatus, TopicResult,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// A CLI tool to query a knowledge-session document.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Session document to read (overrides the configured source)
    #[arg(short, long, global = true)]
    source: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find the section that covers a topic
    Topic {
        /// Topic to look up
        query: String,
        /// Output format
        #[arg(short, long, default_value = "summary")]
        format: OutputFormat,
    },
    /// Show installation details for an MCP server
    Server {
        /// Server name
        name: String,
        /// Output format
        #[arg(short, long, default_value = "summary")]
        format: OutputFormat,
    },
    /// Show the architecture diagram
    Architecture {
        /// Output format
        #[arg(short, long, default_value = "full")]
        format: OutputFormat,
    },
    /// List every topic in the session
    Topics {
        /// Output format
        #[arg(short, long, default_value = "summary")]
        format: OutputFormat,
    },
    /// Show what document is loaded
    Status {
        /// Output format
        #[arg(short, long, default_value = "summary")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum OutputFormat {
    Summary,
    Full,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(OutputFormat::Summary),
            "full" => Ok(OutputFormat::Full),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {s}")),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn load_config(args: &Args) -> anyhow::Result<SessionConfig> {
    let config = match (&args.config, &args.source) {
        (Some(path), source) => {
            let mut config = SessionConfig::load(path)?;
            if let Some(source) = source {
                config.source_path = source.clone();
            }
            config
        }
        (None, Some(source)) => SessionConfig::new(source),
        (None, None) => anyhow::bail!("either --config or --source is required"),
    };
    Ok(config)
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    let handle = EngineHandle::initialize(&config)?;
    let engine = handle.current();

    match args.command {
        Commands::Topic { query, format } => print_topic(&engine.find_topic(&query), &format),
        Commands::Server { name, format } => print_server(&engine.find_server(&name), &format),
        Commands::Architecture { format } => {
            print_architecture(&engine.find_architecture(), &format)
        }
        Commands::Topics { format } => {
            let topics = engine.list_topics();
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(topics)?),
                OutputFormat::Summary | OutputFormat::Full => {
                    println!("Found {} topics:", topics.len());
                    for topic in topics {
                        println!("  {topic}");
                    }
                }
            }
            Ok(())
        }
        Commands::Status { format } => {
            let status = SessionStatus::from_handle(&handle);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
                OutputFormat::Summary | OutputFormat::Full => {
                    println!("Session Status");
                    println!("==============");
                    println!("  Source: {}", status.source_path.display());
                    println!("  Title: {}", status.title);
                    println!("  Date: {}", status.date);
                    println!("  Topics: {}", status.topics);
                    println!(
                        "  Sections: {} ({} subsections)",
                        status.sections, status.subsections
                    );
                    println!("  Code blocks: {}", status.code_blocks);
                    println!("  Servers: {}", status.servers.join(", "));
                    println!("  Loaded at: {}", status.loaded_at.to_rfc3339());
                }
            }
            Ok(())
        }
    }
}

fn preview(text: &str) -> String {
    text.chars().take(100).collect()
}

fn print_topic(result: &TopicResult, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Summary => {
            println!("Topic: {} ({} match)", result.title(), result.match_type());
            println!("Content preview: {}", preview(result.content()));
        }
        OutputFormat::Full => {
            println!("Topic: {}", result.title());
            println!("Match: {}", result.match_type());
            match result {
                TopicResult::Exact { subsections, .. } | TopicResult::Partial { subsections, .. } => {
                    for sub in subsections {
                        println!("  Subsection: {} - {}", sub.title, sub.summary);
                    }
                }
                TopicResult::Subsection { parent_topic, .. } => {
                    println!("Parent topic: {parent_topic}");
                }
                TopicResult::Content {
                    full_section,
                    subsection,
                    ..
                } => {
                    println!("Section: {full_section}");
                    if let Some(subsection) = subsection {
                        println!("Subsection: {subsection}");
                    }
                }
                TopicResult::NoMatch {
                    suggested_topics, ..
                } => {
                    println!("Suggested topics: {}", suggested_topics.join(", "));
                }
            }
            println!("Content:\n{}", result.content());
        }
    }
    Ok(())
}

fn print_server(result: &ServerResult, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Summary | OutputFormat::Full => {
            println!("Server: {}", result.name());
            match result {
                ServerResult::Known {
                    installation_code, ..
                } => println!("Installation:\n{installation_code}"),
                ServerResult::Excerpt {
                    section,
                    subsection,
                    note,
                    ..
                } => {
                    println!("Section: {section}");
                    if let Some(subsection) = subsection {
                        println!("Subsection: {subsection}");
                    }
                    println!("Note: {note}");
                }
                ServerResult::NotFound {
                    available_servers, ..
                } => println!("Available servers: {}", available_servers.join(", ")),
            }
            if *format == OutputFormat::Full {
                println!("Description:\n{}", result.description());
            } else {
                println!("Description preview: {}", preview(result.description()));
            }
        }
    }
    Ok(())
}

fn print_architecture(result: &ArchitectureResult, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Summary | OutputFormat::Full => {
            println!("{}", result.title());
            match result {
                ArchitectureResult::Diagram { description, .. } => {
                    if *format == OutputFormat::Full {
                        println!("{description}");
                    }
                }
                ArchitectureResult::SectionOnly {
                    description, note, ..
                } => {
                    println!("Note: {note}");
                    println!("{description}");
                }
                ArchitectureResult::LooseDiagram { note, .. } => println!("Note: {note}"),
                ArchitectureResult::NotFound { description, .. } => println!("{description}"),
            }
            if let Some(code) = result.diagram_code() {
                println!("```mermaid\n{code}```");
            }
        }
    }
    Ok(())
}
