//! # HTTP Server
//!
//! Binds the sheet routes behind CORS and serves them. The store is
//! handed in by the caller; this layer owns nothing but the socket.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;
use crate::store::DocumentStore;

use super::config::ServerConfig;
use super::routes::{sheet_routes, SheetState};

/// HTTP server for the query surface
pub struct HttpServer<S: DocumentStore> {
    config: ServerConfig,
    state: Arc<SheetState<S>>,
}

impl<S: DocumentStore + 'static> HttpServer<S> {
    /// Create a server around an already-seeded store.
    pub fn new(config: ServerConfig, store: S) -> Self {
        Self {
            config,
            state: Arc::new(SheetState::new(store)),
        }
    }

    /// Build the router with CORS applied, for serving or for tests.
    pub fn router(&self) -> Router {
        // Configure CORS from config
        let cors = if self.config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = self
                .config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        sheet_routes(self.state.clone()).layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid bind address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let router = self.router();

        Logger::info(
            "SERVER_STARTED",
            &[
                ("addr", &addr.to_string()),
                ("version", env!("CARGO_PKG_VERSION")),
            ],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
