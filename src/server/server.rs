//! The catalog server
//!
//! Builds the router (endpoint + health + CORS) over one store and
//! serves it on a tokio listener.

use std::io;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{Logger, MetricsRegistry, Severity};
use crate::resolver::{Dispatcher, Resolvers};
use crate::store::ProductStore;

use super::config::ServerConfig;
use super::routes::{graphql_routes, health_routes, GraphqlState};

/// HTTP server for the product catalog.
pub struct CatalogServer {
    config: ServerConfig,
    router: Router,
}

impl CatalogServer {
    /// Create a server with default configuration
    pub fn new(store: Arc<ProductStore>) -> Self {
        Self::with_config(ServerConfig::default(), store)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: ServerConfig, store: Arc<ProductStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &ServerConfig, store: Arc<ProductStore>) -> Router {
        let metrics = Arc::new(MetricsRegistry::new());
        let state = Arc::new(GraphqlState {
            dispatcher: Dispatcher::new(Resolvers::new(store.clone()), metrics.clone()),
            store,
            metrics,
        });

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(Self::parse_origins(&config.cors_origins)))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes(state.clone()))
            .merge(graphql_routes(state))
            .layer(cors)
    }

    /// Parses configured origins into header values, warning about and
    /// skipping any that are not valid header values.
    fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
        let mut parsed = Vec::with_capacity(origins.len());
        for origin in origins {
            match origin.parse() {
                Ok(value) => parsed.push(value),
                Err(_) => Logger::log_stderr(
                    Severity::Warn,
                    "cors_origin_ignored",
                    &[("origin", origin)],
                ),
            }
        }
        parsed
    }

    /// Returns a clone of the router (for in-process testing)
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Binds the configured address and serves until the process exits.
    pub async fn serve(self) -> io::Result<()> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        Logger::log(
            Severity::Info,
            "server_started",
            &[("addr", &addr), ("endpoint", "/graphql")],
        );
        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_router_with_origins() {
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        // Router construction must not panic on configured origins.
        let _server = CatalogServer::with_config(config, Arc::new(ProductStore::new()));
    }

    #[test]
    fn test_parse_origins_keeps_valid_entries() {
        let parsed = CatalogServer::parse_origins(&[
            "http://localhost:5173".to_string(),
            "http://localhost:3000".to_string(),
        ]);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], "http://localhost:5173");
    }

    #[test]
    fn test_parse_origins_skips_invalid_entries() {
        let parsed = CatalogServer::parse_origins(&[
            "http://bad\norigin".to_string(),
            "http://localhost:5173".to_string(),
        ]);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0], "http://localhost:5173");
    }
}
