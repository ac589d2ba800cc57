//! # sheetstore HTTP Server Module
//!
//! Axum server exposing the query surface.
//!
//! # Endpoints
//!
//! - `POST /{sheet_id}` - direct document query against one collection
//! - `POST /graphql` - GraphQL gateway (placeholder resolution)
//! - `GET /health` - health check

pub mod config;
pub mod errors;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use errors::{ErrorBody, HttpError};
pub use routes::{sheet_routes, SheetState};
pub use server::HttpServer;
