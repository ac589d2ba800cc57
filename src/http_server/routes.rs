//! Sheet HTTP Routes
//!
//! The query surface: one POST endpoint per collection, the GraphQL
//! gateway, and the health check. The collection comes from the path,
//! everything else from the body.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::graphql::{GraphQlGateway, GraphQlRequest, GraphQlResponse, GraphQlService};
use crate::observability::Logger;
use crate::query::{normalize, QueryBody};
use crate::retrieval::{ResultEnvelope, RetrievalExecutor};
use crate::store::DocumentStore;

use super::errors::{HttpError, HttpResult};

// ==================
// Shared State
// ==================

/// State shared across the sheet routes
pub struct SheetState<S: DocumentStore> {
    pub store: S,
    pub gateway: GraphQlGateway,
}

impl<S: DocumentStore> SheetState<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            gateway: GraphQlGateway::new(),
        }
    }
}

// ==================
// Response Types
// ==================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checked_at: String,
}

// ==================
// Sheet Routes
// ==================

/// Create the sheet routes
///
/// `/health` and `/graphql` are registered before the collection
/// capture; static segments win over `{sheet_id}` on the same method.
pub fn sheet_routes<S: DocumentStore + 'static>(state: Arc<SheetState<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/graphql", post(graphql_handler::<S>))
        .route("/{sheet_id}", post(query_handler::<S>))
        .with_state(state)
}

/// Direct query endpoint
///
/// The body is optional: absent or empty behaves like `{}` and selects
/// the default page of the collection. A body that is present but not a
/// JSON object is the one thing this endpoint refuses.
async fn query_handler<S: DocumentStore + 'static>(
    State(state): State<Arc<SheetState<S>>>,
    Path(sheet_id): Path<String>,
    body: Bytes,
) -> HttpResult<Json<ResultEnvelope>> {
    let request_id = Uuid::new_v4().to_string();

    let body: QueryBody = if body.is_empty() {
        QueryBody::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            Logger::warn(
                "BODY_REJECTED",
                &[
                    ("collection", sheet_id.as_str()),
                    ("reason", &e.to_string()),
                    ("request_id", &request_id),
                ],
            );
            HttpError::InvalidBody(e.to_string())
        })?
    };

    let descriptor = normalize(&body);
    let executor = RetrievalExecutor::new(&state.store);

    match executor.fetch(&sheet_id, &descriptor) {
        Ok(envelope) => {
            let count = envelope.count.to_string();
            Logger::info(
                "QUERY_EXECUTED",
                &[
                    ("collection", sheet_id.as_str()),
                    ("count", &count),
                    ("mode", envelope.mode.as_str()),
                    ("request_id", &request_id),
                ],
            );
            Ok(Json(envelope))
        }
        Err(err) => {
            Logger::error(
                "RETRIEVAL_FAILED",
                &[
                    ("collection", err.collection()),
                    ("reason", &err.to_string()),
                    ("request_id", &request_id),
                    ("store_code", err.store_code().code()),
                ],
            );
            Err(HttpError::from(err))
        }
    }
}

/// GraphQL endpoint
///
/// Always answers 200: GraphQL transports failures inside the response
/// envelope, not as HTTP status.
async fn graphql_handler<S: DocumentStore + 'static>(
    State(state): State<Arc<SheetState<S>>>,
    Json(request): Json<GraphQlRequest>,
) -> Json<GraphQlResponse> {
    let response = state
        .gateway
        .execute(&request)
        .unwrap_or_else(|err| GraphQlResponse::error(err.to_string()));

    Json(response)
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checked_at: chrono::Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            checked_at: "2024-01-01T00:00:00+00:00".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("checked_at"));
    }

    #[test]
    fn test_router_builds() {
        let state = Arc::new(SheetState::new(MemoryStore::new()));
        let _router = sheet_routes(state);
    }

    #[test]
    fn test_state_exposes_store_and_gateway() {
        let state = SheetState::new(MemoryStore::new());
        let request = GraphQlRequest {
            query: "{ rows }".to_string(),
            variables: serde_json::Value::Null,
            operation_name: None,
        };

        let response = state.gateway.execute(&request).unwrap();
        assert!(response.data.is_some());
    }
}
