//! Gateway wire types and the placeholder resolver.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Parameters accepted by the GraphQL endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(default)]
    pub variables: Value,
    #[serde(default)]
    pub operation_name: Option<String>,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<Value>,
}

impl GraphQlResponse {
    /// Data-only response.
    pub fn data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Error-only response, GraphQL style: `data` null, one message in
    /// `errors`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: vec![json!({"message": message.into()})],
        }
    }
}

/// Gateway failure surface.
#[derive(Debug, Error)]
pub enum GraphQlError {
    #[error("graphql execution failed: {0}")]
    Execution(String),
}

/// Seam for executing GraphQL documents, so the HTTP layer does not
/// care whether resolution is canned or real.
pub trait GraphQlService: Send + Sync {
    /// Executes one GraphQL document and returns the response envelope.
    fn execute(&self, request: &GraphQlRequest) -> Result<GraphQlResponse, GraphQlError>;
}

/// Placeholder gateway answering every document with fixed demo rows.
// TODO: resolve against the retrieval executor once a schema exists for
// sheet collections.
pub struct GraphQlGateway;

impl GraphQlGateway {
    pub fn new() -> Self {
        Self
    }

    fn demo_rows() -> Value {
        json!([
            {"letter": "A", "number": 1},
            {"letter": "B", "number": 2}
        ])
    }
}

impl Default for GraphQlGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphQlService for GraphQlGateway {
    fn execute(&self, request: &GraphQlRequest) -> Result<GraphQlResponse, GraphQlError> {
        // The document is accepted but not parsed.
        let _ = &request.query;
        Ok(GraphQlResponse::data(json!({"rows": Self::demo_rows()})))
    }
}
