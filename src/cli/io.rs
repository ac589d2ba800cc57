//! JSON I/O handling for the one-shot query command
//!
//! - Input: one JSON body via stdin (empty input means empty body)
//! - Output: one result envelope via stdout
//! - UTF-8 only

use std::io::{self, Read, Write};

use crate::query::QueryBody;
use crate::retrieval::ResultEnvelope;

use super::errors::CliResult;

/// Read a query body from stdin.
pub fn read_request() -> CliResult<QueryBody> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    if input.trim().is_empty() {
        return Ok(QueryBody::default());
    }

    let body: QueryBody = serde_json::from_str(&input)?;
    Ok(body)
}

/// Write a result envelope to stdout
pub fn write_envelope(envelope: &ResultEnvelope) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, envelope)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
