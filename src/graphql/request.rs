//! The request envelope
//!
//! One POST body shape for every operation: the document text plus a
//! map of variable values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{GraphqlError, GraphqlResult};

/// A `{query, variables}` envelope. `variables` defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    pub query: String,
    #[serde(default)]
    pub variables: Map<String, Value>,
}

impl RequestEnvelope {
    /// Builds an envelope from a document and a variables value.
    ///
    /// # Errors
    ///
    /// Returns `SHELF_INVALID_REQUEST` if `variables` is neither an
    /// object nor null.
    pub fn new(query: impl Into<String>, variables: Value) -> GraphqlResult<Self> {
        let variables = match variables {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(GraphqlError::invalid_request(format!(
                    "Variables must be an object, got {}",
                    json_type_name(&other)
                )));
            }
        };
        Ok(Self {
            query: query.into(),
            variables,
        })
    }

    /// Parses an envelope from a JSON string.
    pub fn parse(body: &str) -> GraphqlResult<Self> {
        serde_json::from_str(body)
            .map_err(|e| GraphqlError::invalid_request(format!("Invalid JSON envelope: {}", e)))
    }
}

/// Human-readable JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_envelope() {
        let envelope =
            RequestEnvelope::parse(r#"{"query": "{ products { id } }", "variables": {"a": 1}}"#)
                .unwrap();
        assert_eq!(envelope.query, "{ products { id } }");
        assert_eq!(envelope.variables.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_parse_defaults_missing_variables() {
        let envelope = RequestEnvelope::parse(r#"{"query": "{ products { id } }"}"#).unwrap();
        assert!(envelope.variables.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = RequestEnvelope::parse("not json").unwrap_err();
        assert_eq!(err.code(), "SHELF_INVALID_REQUEST");
    }

    #[test]
    fn test_new_accepts_null_variables() {
        let envelope = RequestEnvelope::new("{ products { id } }", Value::Null).unwrap();
        assert!(envelope.variables.is_empty());
    }

    #[test]
    fn test_new_rejects_array_variables() {
        let err = RequestEnvelope::new("{ products { id } }", json!([1, 2])).unwrap_err();
        assert!(err.message().contains("array"));
    }
}
