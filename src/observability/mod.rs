//! Observability
//!
//! Structured JSON logging for the query path. One log line is one
//! event; keys are emitted in deterministic order so log output can be
//! compared and grepped. Logging never affects request outcomes.

mod logger;

pub use logger::{Logger, Severity};
