//! The catalog client
//!
//! `execute` is the generic request function; the typed methods render
//! their documents once from the registry descriptors and decode the
//! data payload into domain types.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use crate::graphql::{registry, OperationDef, SortOrder};
use crate::store::{Product, ProductDraft, ProductPatch};

use super::errors::{ClientError, ClientResult};

/// The six typed operations of the contract.
///
/// `CatalogClient` implements this over HTTP; tests implement it over
/// an in-process double.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn products(&self) -> ClientResult<Vec<Product>>;
    async fn product(&self, id: &str) -> ClientResult<Option<Product>>;
    async fn sorted_products(&self, field: &str, order: SortOrder)
        -> ClientResult<Vec<Product>>;
    async fn add_product(&self, draft: &ProductDraft) -> ClientResult<Product>;
    async fn update_product(&self, id: &str, patch: &ProductPatch) -> ClientResult<Product>;
    async fn delete_product(&self, id: &str) -> ClientResult<bool>;
}

/// HTTP client for the catalog endpoint.
pub struct CatalogClient {
    endpoint: String,
    http: reqwest::Client,
}

impl CatalogClient {
    /// Creates a client for the given endpoint URL, e.g.
    /// `http://localhost:4000/graphql`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Posts an operation document with variables and unwraps the
    /// response.
    ///
    /// # Errors
    ///
    /// - `ClientError::Server` with the first error message if the
    ///   response carries an `errors` list
    /// - `ClientError::Transport` for network failures, non-JSON
    ///   bodies, or a body with neither data nor errors
    pub async fn execute(&self, document: &str, variables: Value) -> ClientResult<Value> {
        let body = json!({ "query": document, "variables": variables });
        let response = self.http.post(&self.endpoint).json(&body).send().await?;
        let payload: Value = response
            .json()
            .await
            .map_err(|e| ClientError::Transport(format!("Invalid response body: {}", e)))?;
        Self::unwrap_payload(payload)
    }

    /// Splits a response payload into data or the first error message.
    fn unwrap_payload(payload: Value) -> ClientResult<Value> {
        if let Some(errors) = payload.get("errors").and_then(Value::as_array) {
            if let Some(first) = errors.first() {
                let message = first
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown server error");
                return Err(ClientError::Server(message.to_string()));
            }
        }
        match payload.get("data") {
            Some(data) => Ok(data.clone()),
            None => Err(ClientError::Transport(
                "Response carried neither data nor errors".to_string(),
            )),
        }
    }

    /// Decodes one operation field out of a data payload.
    fn decode<T: DeserializeOwned>(data: Value, op: &OperationDef) -> ClientResult<T> {
        let value = data.get(op.name).cloned().unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|e| {
            ClientError::Transport(format!("Malformed {} payload: {}", op.name, e))
        })
    }

    async fn run<T: DeserializeOwned>(
        &self,
        op: &OperationDef,
        variables: Value,
    ) -> ClientResult<T> {
        let data = self.execute(&op.document(), variables).await?;
        Self::decode(data, op)
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn products(&self) -> ClientResult<Vec<Product>> {
        self.run(&registry::PRODUCTS, json!({})).await
    }

    async fn product(&self, id: &str) -> ClientResult<Option<Product>> {
        self.run(&registry::PRODUCT, json!({ "id": id })).await
    }

    async fn sorted_products(
        &self,
        field: &str,
        order: SortOrder,
    ) -> ClientResult<Vec<Product>> {
        self.run(
            &registry::SORTED_PRODUCTS,
            json!({ "field": field, "order": order.as_str() }),
        )
        .await
    }

    async fn add_product(&self, draft: &ProductDraft) -> ClientResult<Product> {
        let variables = serde_json::to_value(draft)
            .map_err(|e| ClientError::Transport(format!("Draft serialization failed: {}", e)))?;
        self.run(&registry::ADD_PRODUCT, variables).await
    }

    async fn update_product(&self, id: &str, patch: &ProductPatch) -> ClientResult<Product> {
        // Absent patch fields are skipped during serialization, so the
        // server sees them as not supplied.
        let mut variables = match serde_json::to_value(patch) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        variables.insert("id".to_string(), Value::String(id.to_string()));
        self.run(&registry::UPDATE_PRODUCT, Value::Object(variables))
            .await
    }

    async fn delete_product(&self, id: &str) -> ClientResult<bool> {
        self.run(&registry::DELETE_PRODUCT, json!({ "id": id })).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_payload_returns_data() {
        let data =
            CatalogClient::unwrap_payload(json!({"data": {"deleteProduct": true}})).unwrap();
        assert_eq!(data, json!({"deleteProduct": true}));
    }

    #[test]
    fn test_unwrap_payload_takes_first_error_only() {
        let err = CatalogClient::unwrap_payload(json!({
            "errors": [{"message": "first"}, {"message": "second"}]
        }))
        .unwrap_err();
        match err {
            ClientError::Server(message) => assert_eq!(message, "first"),
            other => panic!("expected server error, got {:?}", other),
        }
    }

    #[test]
    fn test_unwrap_payload_empty_errors_falls_through_to_data() {
        let data = CatalogClient::unwrap_payload(json!({
            "errors": [],
            "data": {"products": []}
        }))
        .unwrap();
        assert_eq!(data, json!({"products": []}));
    }

    #[test]
    fn test_unwrap_payload_rejects_shapeless_body() {
        let err = CatalogClient::unwrap_payload(json!({"ok": true})).unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[test]
    fn test_decode_null_product_is_none() {
        let found: Option<Product> =
            CatalogClient::decode(json!({"product": null}), &registry::PRODUCT).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_decode_product_list() {
        let data = json!({"products": [{
            "id": "p1", "title": "Pen", "category": "Office",
            "price": 1.5, "inStock": true
        }]});
        let products: Vec<Product> =
            CatalogClient::decode(data, &registry::PRODUCTS).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Pen");
    }

    #[test]
    fn test_decode_malformed_payload_is_transport_error() {
        let err = CatalogClient::decode::<Vec<Product>>(
            json!({"products": [{"id": "p1"}]}),
            &registry::PRODUCTS,
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
