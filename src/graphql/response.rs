//! Response envelope
//!
//! Responses carry either `{data: {...}}` or `{errors: [{message}]}`.
//! Richer error metadata stops at this boundary; only the message
//! survives onto the wire.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One entry in an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub message: String,
}

/// A complete operation response.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphqlResponse {
    Data(Value),
    Errors(Vec<ErrorEntry>),
}

impl GraphqlResponse {
    /// Creates a data response with the value keyed under the
    /// operation field name.
    pub fn data(field: &str, value: Value) -> Self {
        GraphqlResponse::Data(json!({ field: value }))
    }

    /// Creates a single-message error response.
    pub fn error(message: impl Into<String>) -> Self {
        GraphqlResponse::Errors(vec![ErrorEntry {
            message: message.into(),
        }])
    }

    /// Returns the wire value.
    pub fn to_value(&self) -> Value {
        match self {
            GraphqlResponse::Data(data) => json!({ "data": data }),
            GraphqlResponse::Errors(errors) => json!({
                "errors": errors
                    .iter()
                    .map(|e| json!({ "message": e.message }))
                    .collect::<Vec<_>>()
            }),
        }
    }

    /// Returns whether this is a data response.
    pub fn is_data(&self) -> bool {
        matches!(self, GraphqlResponse::Data(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_response_keys_under_field() {
        let resp = GraphqlResponse::data("deleteProduct", Value::Bool(true));
        assert!(resp.is_data());
        assert_eq!(resp.to_value(), json!({"data": {"deleteProduct": true}}));
    }

    #[test]
    fn test_error_response_single_message() {
        let resp = GraphqlResponse::error("Product not found");
        assert!(!resp.is_data());
        assert_eq!(
            resp.to_value(),
            json!({"errors": [{"message": "Product not found"}]})
        );
    }

    #[test]
    fn test_error_message_survives_serialization() {
        let resp = GraphqlResponse::error("Invalid sort field");
        let wire = serde_json::to_string(&resp.to_value()).unwrap();
        assert!(wire.contains("Invalid sort field"));
    }
}
