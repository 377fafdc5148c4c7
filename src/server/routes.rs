//! HTTP routes
//!
//! `POST /graphql` executes one envelope; `GET /health` reports the
//! document count and operation counters. Executed operations always
//! answer 200 with errors carried in the body; only a body that is not
//! a valid envelope gets a 4xx from the extractor.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::graphql::RequestEnvelope;
use crate::observability::{MetricsRegistry, MetricsSnapshot};
use crate::resolver::Dispatcher;
use crate::store::ProductStore;

/// State shared by the graphql and health handlers.
pub struct GraphqlState {
    pub dispatcher: Dispatcher,
    pub store: Arc<ProductStore>,
    pub metrics: Arc<MetricsRegistry>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    products: usize,
    operations: MetricsSnapshot,
}

/// Create the operation endpoint router
pub fn graphql_routes(state: Arc<GraphqlState>) -> Router {
    Router::new()
        .route("/graphql", post(graphql_handler))
        .with_state(state)
}

/// Create the health probe router
pub fn health_routes(state: Arc<GraphqlState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn graphql_handler(
    State(state): State<Arc<GraphqlState>>,
    Json(envelope): Json<RequestEnvelope>,
) -> Json<Value> {
    Json(state.dispatcher.dispatch(&envelope).to_value())
}

async fn health_handler(State(state): State<Arc<GraphqlState>>) -> Json<HealthResponse> {
    let (status, products) = match state.store.len() {
        Ok(count) => ("ok", count),
        Err(_) => ("degraded", 0),
    };
    Json(HealthResponse {
        status,
        products,
        operations: state.metrics.snapshot(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Resolvers;
    use crate::store::ProductDraft;
    use serde_json::json;

    fn setup_state() -> Arc<GraphqlState> {
        let store = Arc::new(ProductStore::new());
        let metrics = Arc::new(MetricsRegistry::new());
        Arc::new(GraphqlState {
            dispatcher: Dispatcher::new(Resolvers::new(store.clone()), metrics.clone()),
            store,
            metrics,
        })
    }

    fn draft(title: &str) -> ProductDraft {
        ProductDraft {
            title: title.to_string(),
            category: "Office".to_string(),
            price: 1.5,
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn test_health_reports_document_count() {
        let state = setup_state();
        state.store.seed(vec![draft("Pen"), draft("Marker")]).unwrap();

        let Json(health) = health_handler(State(state)).await;

        assert_eq!(health.status, "ok");
        assert_eq!(health.products, 2);
    }

    #[tokio::test]
    async fn test_health_reflects_operation_counters() {
        let state = setup_state();
        let envelope = RequestEnvelope::new(
            "query GetProducts {\n  products { id }\n}",
            json!({}),
        )
        .unwrap();
        state.dispatcher.dispatch(&envelope);

        let Json(health) = health_handler(State(state)).await;

        assert_eq!(health.products, 0);
        assert_eq!(health.operations.queries_executed, 1);
        assert_eq!(health.operations.operations_rejected, 0);
    }
}
