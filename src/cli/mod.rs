//! CLI module for sheetstore
//!
//! Provides the command-line interface:
//! - serve: seed the store from the configured data file, serve HTTP
//! - query: one-shot query against a collection, stdin to stdout

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{query, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
