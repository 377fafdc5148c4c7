//! Operation document scanner
//!
//! The server needs two facts from an incoming document: the operation
//! kind and the field being invoked. Selection sets are not interpreted;
//! every operation returns its full contract shape.

use super::errors::{GraphqlError, GraphqlResult};
use super::types::OperationKind;

/// The relevant parts of an operation document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub kind: OperationKind,
    /// The first top-level field, e.g. `sortedProducts`
    pub field: String,
}

impl ParsedDocument {
    /// Scans an operation document.
    ///
    /// Accepts the forms clients actually send:
    /// - `query Name($v: T) { field(...) { ... } }`
    /// - `mutation Name($v: T) { field(...) }`
    /// - bare selections `{ field { ... } }` (treated as a query)
    ///
    /// # Errors
    ///
    /// Returns `SHELF_INVALID_REQUEST` for an empty document, a missing
    /// selection set, an unsupported kind keyword, or a missing field.
    pub fn parse(query: &str) -> GraphqlResult<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(GraphqlError::invalid_request("Empty operation document"));
        }

        let Some((head, body)) = trimmed.split_once('{') else {
            return Err(GraphqlError::invalid_request(
                "Operation document has no selection set",
            ));
        };

        // The kind keyword may run straight into a variable list
        // (`query($id: ID!)`), so split on '(' as well as whitespace.
        let keyword = head
            .split_whitespace()
            .next()
            .and_then(|t| t.split('(').next())
            .unwrap_or("");
        let kind = match keyword {
            "" | "query" => OperationKind::Query,
            "mutation" => OperationKind::Mutation,
            other => {
                return Err(GraphqlError::invalid_request(format!(
                    "Unsupported operation kind: {}",
                    other
                )));
            }
        };

        let field: String = body
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        if field.is_empty() {
            return Err(GraphqlError::invalid_request(
                "Operation document has no field",
            ));
        }

        Ok(Self { kind, field })
    }
}
