//! CLI subcommands wrapping the analyzer core.

pub mod classify_cmd;
pub mod entries_cmd;
pub mod run_cmd;
pub mod scan_cmd;
pub mod search_cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "spyglass",
    version,
    about = "Classify security indicators in selected text and map them to lookup actions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify text into an indicator type
    Classify { text: String },
    /// Print the menu entries available for text
    Entries {
        text: String,
        /// Emit entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the search URL for one service
    Search {
        text: String,
        /// Service name, e.g. "Shodan"
        #[arg(long)]
        on: String,
    },
    /// Build search URLs for every enabled service
    SearchAll { text: String },
    /// Submit text to a scanning service and print the report URL
    Scan {
        text: String,
        /// Scanner name, e.g. "urlscan.io"
        #[arg(long)]
        on: String,
    },
    /// Decode an encoded directive and execute it
    Run { directive: String },
}

/// Parse arguments and dispatch.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { text } => classify_cmd::execute(&text),
        Commands::Entries { text, json } => entries_cmd::execute(&text, json),
        Commands::Search { text, on } => search_cmd::execute(&text, Some(&on)),
        Commands::SearchAll { text } => search_cmd::execute(&text, None),
        Commands::Scan { text, on } => scan_cmd::execute(&text, &on).await,
        Commands::Run { directive } => run_cmd::execute(&directive).await,
    }
}

/// Surface a core error the way a host notification would: the error's
/// message alone, then a failure exit.
pub(crate) fn notify(err: &crate::error::Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
