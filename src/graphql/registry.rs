//! The operation registry
//!
//! The six operations of the catalog contract, defined once as
//! constants. Lookup is by field name; the SDL renderer reproduces the
//! whole contract for `shelfql schema`.

use super::types::{ArgDef, ArgType, OperationDef, OperationKind, ResultShape, PRODUCT_FIELDS};

const ID_ARG: ArgDef = ArgDef {
    name: "id",
    ty: ArgType::Id,
    required: true,
    default: None,
};

/// `products: [Product!]!`
pub const PRODUCTS: OperationDef = OperationDef {
    name: "products",
    doc_name: "GetProducts",
    kind: OperationKind::Query,
    args: &[],
    result: ResultShape::ProductList,
};

/// `product(id: ID!): Product`
pub const PRODUCT: OperationDef = OperationDef {
    name: "product",
    doc_name: "GetProduct",
    kind: OperationKind::Query,
    args: &[ID_ARG],
    result: ResultShape::NullableProduct,
};

/// `sortedProducts(field: String!, order: SortOrder = ASC): [Product!]!`
pub const SORTED_PRODUCTS: OperationDef = OperationDef {
    name: "sortedProducts",
    doc_name: "GetSortedProducts",
    kind: OperationKind::Query,
    args: &[
        ArgDef {
            name: "field",
            ty: ArgType::Text,
            required: true,
            default: None,
        },
        ArgDef {
            name: "order",
            ty: ArgType::SortOrder,
            required: false,
            default: Some("ASC"),
        },
    ],
    result: ResultShape::ProductList,
};

/// `addProduct(title, category, price, inStock): Product!`
pub const ADD_PRODUCT: OperationDef = OperationDef {
    name: "addProduct",
    doc_name: "AddProduct",
    kind: OperationKind::Mutation,
    args: &[
        ArgDef {
            name: "title",
            ty: ArgType::Text,
            required: true,
            default: None,
        },
        ArgDef {
            name: "category",
            ty: ArgType::Text,
            required: true,
            default: None,
        },
        ArgDef {
            name: "price",
            ty: ArgType::Float,
            required: true,
            default: None,
        },
        ArgDef {
            name: "inStock",
            ty: ArgType::Boolean,
            required: true,
            default: None,
        },
    ],
    result: ResultShape::Product,
};

/// `updateProduct(id, title?, category?, price?, inStock?): Product!`
pub const UPDATE_PRODUCT: OperationDef = OperationDef {
    name: "updateProduct",
    doc_name: "UpdateProduct",
    kind: OperationKind::Mutation,
    args: &[
        ID_ARG,
        ArgDef {
            name: "title",
            ty: ArgType::Text,
            required: false,
            default: None,
        },
        ArgDef {
            name: "category",
            ty: ArgType::Text,
            required: false,
            default: None,
        },
        ArgDef {
            name: "price",
            ty: ArgType::Float,
            required: false,
            default: None,
        },
        ArgDef {
            name: "inStock",
            ty: ArgType::Boolean,
            required: false,
            default: None,
        },
    ],
    result: ResultShape::Product,
};

/// `deleteProduct(id: ID!): Boolean!`
pub const DELETE_PRODUCT: OperationDef = OperationDef {
    name: "deleteProduct",
    doc_name: "DeleteProduct",
    kind: OperationKind::Mutation,
    args: &[ID_ARG],
    result: ResultShape::Boolean,
};

/// Every operation in the contract.
pub const OPERATIONS: [&OperationDef; 6] = [
    &PRODUCTS,
    &PRODUCT,
    &SORTED_PRODUCTS,
    &ADD_PRODUCT,
    &UPDATE_PRODUCT,
    &DELETE_PRODUCT,
];

/// Looks up an operation descriptor by field name.
pub fn lookup(field: &str) -> Option<&'static OperationDef> {
    OPERATIONS.iter().copied().find(|op| op.name == field)
}

/// Renders the contract as GraphQL SDL.
pub fn sdl() -> String {
    let mut out = String::with_capacity(512);

    out.push_str("type Product {\n");
    for field in PRODUCT_FIELDS {
        let ty = match field {
            "id" => "ID!",
            "price" => "Float!",
            "inStock" => "Boolean!",
            _ => "String!",
        };
        out.push_str(&format!("  {}: {}\n", field, ty));
    }
    out.push_str("}\n\n");

    out.push_str("enum SortOrder {\n  ASC\n  DESC\n}\n\n");

    out.push_str("type Query {\n");
    for op in OPERATIONS {
        if op.kind == OperationKind::Query {
            out.push_str(&format!("  {}\n", op.sdl_field()));
        }
    }
    out.push_str("}\n\n");

    out.push_str("type Mutation {\n");
    for op in OPERATIONS {
        if op.kind == OperationKind::Mutation {
            out.push_str(&format!("  {}\n", op.sdl_field()));
        }
    }
    out.push_str("}\n");

    out
}
