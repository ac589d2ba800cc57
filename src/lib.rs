//! sheetstore - spreadsheet-backed document collections served over HTTP
//!
//! Request bodies are normalized into query descriptors, executed against
//! a document store, and answered with a uniform result envelope.

pub mod cli;
pub mod graphql;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod retrieval;
pub mod store;
