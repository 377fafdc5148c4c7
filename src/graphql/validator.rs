//! Variable validation
//!
//! Validation semantics:
//! - All required arguments are present and non-null
//! - No undeclared variable names
//! - Types match exactly; the only coercion is JSON integer to Float
//! - Null for an optional argument means absent (there is no
//!   set-to-null in this contract)
//! - Declared defaults apply when an optional argument is absent
//!
//! Validation runs before any resolver, so enum and type mistakes never
//! touch the store.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::errors::{GraphqlError, GraphqlResult};
use super::request::json_type_name;
use super::types::{ArgDef, ArgType, OperationDef, SortOrder};

/// One validated argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Id(String),
    Text(String),
    Float(f64),
    Boolean(bool),
    SortOrder(SortOrder),
}

/// The validated, typed arguments of one request.
#[derive(Debug, Clone, Default)]
pub struct ArgValues {
    values: HashMap<&'static str, ArgValue>,
}

impl ArgValues {
    /// Returns a text argument if supplied.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ArgValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns a float argument if supplied.
    pub fn float(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(ArgValue::Float(f)) => Some(*f),
            _ => None,
        }
    }

    /// Returns a boolean argument if supplied.
    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(ArgValue::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    /// Returns an id argument, failing if absent.
    pub fn require_id(&self, name: &str) -> GraphqlResult<&str> {
        match self.values.get(name) {
            Some(ArgValue::Id(s)) => Ok(s),
            _ => Err(missing(name)),
        }
    }

    /// Returns a text argument, failing if absent.
    pub fn require_text(&self, name: &str) -> GraphqlResult<&str> {
        self.text(name).ok_or_else(|| missing(name))
    }

    /// Returns a float argument, failing if absent.
    pub fn require_float(&self, name: &str) -> GraphqlResult<f64> {
        self.float(name).ok_or_else(|| missing(name))
    }

    /// Returns a boolean argument, failing if absent.
    pub fn require_boolean(&self, name: &str) -> GraphqlResult<bool> {
        self.boolean(name).ok_or_else(|| missing(name))
    }

    /// Returns a sort order argument, failing if absent. Descriptors
    /// with a declared default always have one after validation.
    pub fn require_sort_order(&self, name: &str) -> GraphqlResult<SortOrder> {
        match self.values.get(name) {
            Some(ArgValue::SortOrder(order)) => Ok(*order),
            _ => Err(missing(name)),
        }
    }
}

fn missing(name: &str) -> GraphqlError {
    GraphqlError::invalid_argument(format!("Missing required argument: {}", name))
}

/// Validates variable maps against operation descriptors.
pub struct VariableValidator;

impl VariableValidator {
    /// Validates `variables` against the descriptor, producing typed
    /// argument values.
    ///
    /// # Errors
    ///
    /// Returns `SHELF_INVALID_ARGUMENT` if a required argument is
    /// missing or null, a variable name is undeclared, or a value does
    /// not fit its declared type.
    pub fn validate(
        op: &OperationDef,
        variables: &Map<String, Value>,
    ) -> GraphqlResult<ArgValues> {
        // Undeclared names are rejected outright.
        for name in variables.keys() {
            if !op.args.iter().any(|arg| arg.name == name) {
                return Err(GraphqlError::invalid_argument(format!(
                    "Unknown argument: {}",
                    name
                )));
            }
        }

        let mut values = HashMap::new();
        for arg in op.args {
            match variables.get(arg.name) {
                Some(value) if !value.is_null() => {
                    values.insert(arg.name, Self::coerce(arg, value)?);
                }
                // Explicit null counts as absent for optional
                // arguments; required arguments must carry a value.
                Some(_) | None => {
                    if arg.required {
                        return Err(missing(arg.name));
                    }
                    if let Some(default) = arg.default {
                        values.insert(arg.name, Self::coerce_default(arg, default));
                    }
                }
            }
        }

        Ok(ArgValues { values })
    }

    fn coerce(arg: &ArgDef, value: &Value) -> GraphqlResult<ArgValue> {
        match arg.ty {
            ArgType::Id => value
                .as_str()
                .map(|s| ArgValue::Id(s.to_string()))
                .ok_or_else(|| type_mismatch(arg, value)),
            ArgType::Text => value
                .as_str()
                .map(|s| ArgValue::Text(s.to_string()))
                .ok_or_else(|| type_mismatch(arg, value)),
            ArgType::Float => value
                .as_f64()
                .map(ArgValue::Float)
                .ok_or_else(|| type_mismatch(arg, value)),
            ArgType::Boolean => value
                .as_bool()
                .map(ArgValue::Boolean)
                .ok_or_else(|| type_mismatch(arg, value)),
            ArgType::SortOrder => {
                let raw = value.as_str().ok_or_else(|| type_mismatch(arg, value))?;
                SortOrder::parse(raw).map(ArgValue::SortOrder).ok_or_else(|| {
                    GraphqlError::invalid_argument(format!(
                        "Argument {} must be ASC or DESC, got {}",
                        arg.name, raw
                    ))
                })
            }
        }
    }

    fn coerce_default(arg: &ArgDef, default: &'static str) -> ArgValue {
        match arg.ty {
            ArgType::SortOrder => {
                // Defaults are declared in-crate; a bad literal is a
                // programming error, caught by the registry tests.
                ArgValue::SortOrder(SortOrder::parse(default).unwrap_or(SortOrder::Asc))
            }
            ArgType::Id => ArgValue::Id(default.to_string()),
            ArgType::Text => ArgValue::Text(default.to_string()),
            ArgType::Float => ArgValue::Float(default.parse().unwrap_or(0.0)),
            ArgType::Boolean => ArgValue::Boolean(default == "true"),
        }
    }
}

fn type_mismatch(arg: &ArgDef, value: &Value) -> GraphqlError {
    GraphqlError::invalid_argument(format!(
        "Argument {} must be a {}, got {}",
        arg.name,
        arg.ty.gql_name(),
        json_type_name(value)
    ))
}
