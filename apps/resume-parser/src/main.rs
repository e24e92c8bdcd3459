use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_parser::config::Config;
use resume_parser::ResumeParser;

/// Parse a résumé into structured JSON on stdout.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// PDF file to parse, or a plain-text file with --text
    file: PathBuf,

    /// Treat FILE as already-extracted plain text
    #[arg(long)]
    text: bool,

    /// Skip the language model even if an API key is configured
    #[arg(long)]
    heuristic_only: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the JSON result
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume-parser v{}", env!("CARGO_PKG_VERSION"));

    let parser = if args.heuristic_only {
        ResumeParser::heuristic_only(config.max_upload_bytes)
    } else {
        ResumeParser::from_config(&config)?
    };

    match parser.parse_file(&args.file, args.text).await {
        Ok(outcome) => {
            info!(source = outcome.source, "Parsed {}", args.file.display());
            print_json(&outcome, args.pretty)
        }
        Err(e) => {
            print_json(&e.to_body(), args.pretty)?;
            std::process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
