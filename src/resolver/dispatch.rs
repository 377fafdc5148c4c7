//! The operation dispatch pipeline
//!
//! One envelope in, one response out:
//! scan document -> look up descriptor -> validate variables -> run the
//! resolver -> wrap the result under the operation field name.
//!
//! Every request produces exactly one log line, and failures at any
//! stage count as rejected operations.

use std::sync::Arc;

use serde_json::Value;

use crate::graphql::{
    registry, ArgValues, GraphqlError, GraphqlResponse, OperationDef, OperationKind,
    ParsedDocument, RequestEnvelope,
};
use crate::observability::{Logger, MetricsRegistry, Severity};
use crate::store::{ProductDraft, ProductPatch};

use super::errors::ResolverError;
use super::handler::Resolvers;

/// A failure at any dispatch stage: the code is logged, the message
/// goes onto the wire.
struct DispatchError {
    code: &'static str,
    message: String,
}

impl From<GraphqlError> for DispatchError {
    fn from(err: GraphqlError) -> Self {
        Self {
            code: err.code(),
            message: err.message().to_string(),
        }
    }
}

impl From<ResolverError> for DispatchError {
    fn from(err: ResolverError) -> Self {
        Self {
            code: err.code(),
            message: err.message().to_string(),
        }
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            code: "SHELF_RUNTIME_FAULT",
            message: format!("Result serialization failed: {}", err),
        }
    }
}

/// Executes request envelopes against the resolver set.
pub struct Dispatcher {
    resolvers: Resolvers,
    metrics: Arc<MetricsRegistry>,
}

impl Dispatcher {
    /// Creates a dispatcher.
    pub fn new(resolvers: Resolvers, metrics: Arc<MetricsRegistry>) -> Self {
        Self { resolvers, metrics }
    }

    /// Executes one envelope. Never panics and never returns transport
    /// detail; every failure becomes a single-message error response.
    pub fn dispatch(&self, envelope: &RequestEnvelope) -> GraphqlResponse {
        let parsed = match ParsedDocument::parse(&envelope.query) {
            Ok(parsed) => parsed,
            Err(e) => return self.reject("-", e.code(), e.message()),
        };

        let Some(op) = registry::lookup(&parsed.field) else {
            let err = GraphqlError::unknown_operation(&parsed.field);
            return self.reject(&parsed.field, err.code(), err.message());
        };

        if op.kind != parsed.kind {
            let err = GraphqlError::invalid_request(format!(
                "{} is a {}, not a {}",
                op.name,
                op.kind.as_str(),
                parsed.kind.as_str()
            ));
            return self.reject(op.name, err.code(), err.message());
        }

        let args = match crate::graphql::VariableValidator::validate(op, &envelope.variables) {
            Ok(args) => args,
            Err(e) => return self.reject(op.name, e.code(), e.message()),
        };

        match self.run(op, &args) {
            Ok(value) => {
                match op.kind {
                    OperationKind::Query => self.metrics.inc_queries_executed(),
                    OperationKind::Mutation => self.metrics.inc_mutations_executed(),
                }
                Logger::log(
                    Severity::Info,
                    "operation_ok",
                    &[("kind", op.kind.as_str()), ("operation", op.name)],
                );
                GraphqlResponse::data(op.name, value)
            }
            Err(e) => self.reject(op.name, e.code, &e.message),
        }
    }

    /// Runs the resolver matching the descriptor.
    fn run(&self, op: &OperationDef, args: &ArgValues) -> Result<Value, DispatchError> {
        let value = match op.name {
            "products" => serde_json::to_value(self.resolvers.products()?)?,
            "product" => {
                let id = args.require_id("id")?;
                serde_json::to_value(self.resolvers.product(id)?)?
            }
            "sortedProducts" => {
                let field = args.require_text("field")?;
                let order = args.require_sort_order("order")?;
                serde_json::to_value(self.resolvers.sorted_products(field, order)?)?
            }
            "addProduct" => {
                let draft = ProductDraft {
                    title: args.require_text("title")?.to_string(),
                    category: args.require_text("category")?.to_string(),
                    price: args.require_float("price")?,
                    in_stock: args.require_boolean("inStock")?,
                };
                let created = self.resolvers.add_product(draft)?;
                self.metrics.inc_products_created();
                serde_json::to_value(created)?
            }
            "updateProduct" => {
                let id = args.require_id("id")?;
                let patch = ProductPatch {
                    title: args.text("title").map(str::to_string),
                    category: args.text("category").map(str::to_string),
                    price: args.float("price"),
                    in_stock: args.boolean("inStock"),
                };
                let updated = self.resolvers.update_product(id, &patch)?;
                self.metrics.inc_products_updated();
                serde_json::to_value(updated)?
            }
            "deleteProduct" => {
                let id = args.require_id("id")?;
                let deleted = self.resolvers.delete_product(id)?;
                self.metrics.inc_products_deleted();
                Value::Bool(deleted)
            }
            other => {
                // The registry and this match are defined side by side;
                // a descriptor without an arm is a programming error.
                return Err(DispatchError {
                    code: "SHELF_RUNTIME_FAULT",
                    message: format!("Operation {} has no resolver", other),
                });
            }
        };
        Ok(value)
    }

    fn reject(&self, operation: &str, code: &'static str, message: &str) -> GraphqlResponse {
        self.metrics.inc_operations_rejected();
        Logger::log_stderr(
            Severity::Error,
            "operation_failed",
            &[("operation", operation), ("code", code), ("error", message)],
        );
        GraphqlResponse::error(message)
    }
}
