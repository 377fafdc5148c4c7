//! Operation contract type definitions
//!
//! Supported argument types:
//! - ID: opaque identifier string
//! - String: UTF-8 text
//! - Float: 64-bit floating point (accepts integer literals)
//! - Boolean
//! - SortOrder: ASC | DESC enum

use serde::{Deserialize, Serialize};

/// Whether an operation reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// Returns the document keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }
}

/// Argument types supported by the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    Id,
    Text,
    Float,
    Boolean,
    SortOrder,
}

impl ArgType {
    /// Returns the contract-level type name
    pub fn gql_name(&self) -> &'static str {
        match self {
            ArgType::Id => "ID",
            ArgType::Text => "String",
            ArgType::Float => "Float",
            ArgType::Boolean => "Boolean",
            ArgType::SortOrder => "SortOrder",
        }
    }
}

/// One argument in an operation's schema.
#[derive(Debug, Clone, Copy)]
pub struct ArgDef {
    pub name: &'static str,
    pub ty: ArgType,
    pub required: bool,
    /// Contract-level default literal, applied when the argument is absent
    pub default: Option<&'static str>,
}

impl ArgDef {
    /// Renders the variable declaration, e.g. `$order: SortOrder = ASC`.
    fn declaration(&self) -> String {
        let mut out = format!("${}: {}", self.name, self.ty.gql_name());
        if self.required {
            out.push('!');
        }
        if let Some(default) = self.default {
            out.push_str(" = ");
            out.push_str(default);
        }
        out
    }
}

/// The shape an operation resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    /// A single product, always present
    Product,
    /// A product or null
    NullableProduct,
    /// A list of products
    ProductList,
    /// A bare boolean
    Boolean,
}

impl ResultShape {
    /// Returns the contract-level type name
    pub fn gql_name(&self) -> &'static str {
        match self {
            ResultShape::Product => "Product!",
            ResultShape::NullableProduct => "Product",
            ResultShape::ProductList => "[Product!]!",
            ResultShape::Boolean => "Boolean!",
        }
    }

    /// Whether the result carries the product selection set
    fn selects_product(&self) -> bool {
        !matches!(self, ResultShape::Boolean)
    }
}

/// The fields of the product selection set, in contract order.
pub const PRODUCT_FIELDS: [&str; 5] = ["id", "title", "category", "price", "inStock"];

/// A statically defined operation descriptor.
///
/// Descriptors are the single source of truth for the contract: the
/// server validates against them and the client renders its operation
/// documents from them.
#[derive(Debug, Clone, Copy)]
pub struct OperationDef {
    /// The operation field name, e.g. `sortedProducts`
    pub name: &'static str,
    /// Document-level operation name, e.g. `GetSortedProducts`
    pub doc_name: &'static str,
    pub kind: OperationKind,
    pub args: &'static [ArgDef],
    pub result: ResultShape,
}

impl OperationDef {
    /// Renders the canonical operation document for this descriptor.
    ///
    /// Example output:
    ///
    /// ```text
    /// query GetProduct($id: ID!) {
    ///   product(id: $id) { id title category price inStock }
    /// }
    /// ```
    pub fn document(&self) -> String {
        let mut out = String::with_capacity(160);
        out.push_str(self.kind.as_str());
        out.push(' ');
        out.push_str(self.doc_name);

        if !self.args.is_empty() {
            out.push('(');
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&arg.declaration());
            }
            out.push(')');
        }

        out.push_str(" {\n  ");
        out.push_str(self.name);
        if !self.args.is_empty() {
            out.push('(');
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(arg.name);
                out.push_str(": $");
                out.push_str(arg.name);
            }
            out.push(')');
        }
        if self.result.selects_product() {
            out.push_str(" { ");
            out.push_str(&PRODUCT_FIELDS.join(" "));
            out.push_str(" }");
        }
        out.push_str("\n}");
        out
    }

    /// Renders the operation's SDL field line, e.g.
    /// `sortedProducts(field: String!, order: SortOrder = ASC): [Product!]!`.
    pub fn sdl_field(&self) -> String {
        let mut out = String::from(self.name);
        if !self.args.is_empty() {
            out.push('(');
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(arg.name);
                out.push_str(": ");
                out.push_str(arg.ty.gql_name());
                if arg.required {
                    out.push('!');
                }
                if let Some(default) = arg.default {
                    out.push_str(" = ");
                    out.push_str(default);
                }
            }
            out.push(')');
        }
        out.push_str(": ");
        out.push_str(self.result.gql_name());
        out
    }
}

/// Sort order enum carried on the wire as `ASC` / `DESC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses a wire-level value. Returns `None` for anything outside
    /// the enum.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    /// Returns the wire-level value
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("ASC"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::parse("DESC"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("desc"), None);
        assert_eq!(SortOrder::parse(""), None);
    }

    #[test]
    fn test_arg_declaration_rendering() {
        let required = ArgDef {
            name: "id",
            ty: ArgType::Id,
            required: true,
            default: None,
        };
        assert_eq!(required.declaration(), "$id: ID!");

        let defaulted = ArgDef {
            name: "order",
            ty: ArgType::SortOrder,
            required: false,
            default: Some("ASC"),
        };
        assert_eq!(defaulted.declaration(), "$order: SortOrder = ASC");
    }
}
