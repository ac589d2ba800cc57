//! CLI argument definitions using clap
//!
//! Commands:
//! - sheetstore serve --config <path> [--port <port>]
//! - sheetstore query --config <path> --collection <name>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sheetstore - spreadsheet-backed document collections over HTTP
#[derive(Parser, Debug)]
#[command(name = "sheetstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./sheetstore.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Execute a single query from stdin and exit
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./sheetstore.json")]
        config: PathBuf,

        /// Collection to query
        #[arg(long)]
        collection: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
