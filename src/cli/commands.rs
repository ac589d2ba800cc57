//! CLI command implementations
//!
//! Both commands boot the same way: load the config file, seed an
//! in-memory store from the data file it names, then either serve HTTP
//! or run one query and exit.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::Logger;
use crate::query::normalize;
use crate::retrieval::RetrievalExecutor;
use crate::store::MemoryStore;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_envelope};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seed data file, one JSON object mapping collection names to
    /// arrays of documents (optional; no file means an empty store)
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Host to bind (optional, default "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind (optional, default 8130)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (optional; absent uses the server defaults)
    #[serde(default)]
    pub cors_origins: Option<Vec<String>>,
}

// Bind defaults live with the server config; the file format just
// mirrors them.
fn default_host() -> String {
    ServerConfig::default().host
}

fn default_port() -> u16 {
    ServerConfig::default().port
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }
        Ok(())
    }

    /// Convert to the HTTP server's config, optionally overriding the
    /// port from the command line.
    pub fn to_server_config(&self, port_override: Option<u16>) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            host: self.host.clone(),
            port: port_override.unwrap_or(self.port),
            cors_origins: self.cors_origins.clone().unwrap_or(defaults.cors_origins),
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Query { config, collection } => query(&config, &collection),
    }
}

/// Start the HTTP server
///
/// Sequence:
/// 1. Load and validate the config file
/// 2. Seed the in-memory store from the data file
/// 3. Serve until interrupted
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = load_store(&config)?;

    let server = HttpServer::new(config.to_server_config(port), store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Execute a single query and exit
///
/// Reads one query body from stdin, runs it against the seeded store,
/// writes the result envelope to stdout.
pub fn query(config_path: &Path, collection: &str) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = load_store(&config)?;

    let body = read_request()?;
    let descriptor = normalize(&body);

    let executor = RetrievalExecutor::new(&store);
    let envelope = executor
        .fetch(collection, &descriptor)
        .map_err(|e| CliError::query_failed(e.to_string()))?;

    write_envelope(&envelope)?;

    Ok(())
}

/// Seed a fresh in-memory store from the config's data file.
fn load_store(config: &Config) -> CliResult<MemoryStore> {
    let store = MemoryStore::new();

    let data_file = match &config.data_file {
        Some(path) => path,
        None => return Ok(store),
    };

    let content = fs::read_to_string(data_file).map_err(|e| {
        CliError::seed_error(format!("Failed to read data file {:?}: {}", data_file, e))
    })?;

    let collections: serde_json::Map<String, Value> = serde_json::from_str(&content)
        .map_err(|e| CliError::seed_error(format!("Invalid data file JSON: {}", e)))?;

    for (name, documents) in collections {
        let documents = match documents {
            Value::Array(documents) => documents,
            _ => {
                return Err(CliError::seed_error(format!(
                    "Collection '{}' must hold an array of documents",
                    name
                )))
            }
        };

        let count = documents.len().to_string();
        store
            .insert_many(&name, documents)
            .map_err(|e| CliError::seed_error(e.to_string()))?;

        Logger::info(
            "COLLECTION_SEEDED",
            &[("collection", name.as_str()), ("count", &count)],
        );
    }

    Ok(store)
}
