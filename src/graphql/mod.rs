//! GraphQL gateway
//!
//! Scaffolding for the `POST /graphql` endpoint. The wire types and the
//! service seam are real; resolution is not wired to the retrieval
//! layer yet, so every document is answered with the fixed demo rows.

mod gateway;

pub use gateway::{GraphQlError, GraphQlGateway, GraphQlRequest, GraphQlResponse, GraphQlService};
