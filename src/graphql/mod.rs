//! Schema Contract for shelfql
//!
//! The typed operation surface the resolver layer must satisfy and the
//! client library depends on.
//!
//! # Design Principles
//!
//! - Operations are statically defined descriptors, not strings
//!   assembled per call
//! - Variables are validated against the descriptor before any
//!   resolver runs
//! - Exact types, no implicit coercion beyond int-to-float, no
//!   undeclared variables, no nulls
//! - Responses carry either a data payload or a list of messages

pub mod document;
pub mod errors;
pub mod registry;
pub mod request;
pub mod response;
pub mod types;
pub mod validator;

pub use document::ParsedDocument;
pub use errors::{GraphqlError, GraphqlErrorCode, GraphqlResult};
pub use request::RequestEnvelope;
pub use response::{ErrorEntry, GraphqlResponse};
pub use types::{ArgDef, ArgType, OperationDef, OperationKind, ResultShape, SortOrder};
pub use validator::{ArgValues, VariableValidator};
