//! Schema layer error types
//!
//! Everything the schema layer rejects is a client mistake: a malformed
//! document, an unknown operation, or variables that do not fit the
//! descriptor. Only the message crosses the transport boundary.

use std::fmt;

/// Schema layer error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphqlErrorCode {
    /// Malformed operation document or envelope
    InvalidRequest,
    /// Operation field not in the contract
    UnknownOperation,
    /// Variables do not satisfy the argument schema
    InvalidArgument,
}

impl GraphqlErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            GraphqlErrorCode::InvalidRequest => "SHELF_INVALID_REQUEST",
            GraphqlErrorCode::UnknownOperation => "SHELF_UNKNOWN_OPERATION",
            GraphqlErrorCode::InvalidArgument => "SHELF_INVALID_ARGUMENT",
        }
    }
}

impl fmt::Display for GraphqlErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema layer error
#[derive(Debug, Clone)]
pub struct GraphqlError {
    code: GraphqlErrorCode,
    message: String,
}

impl GraphqlError {
    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: GraphqlErrorCode::InvalidRequest,
            message: reason.into(),
        }
    }

    /// Create an unknown operation error
    pub fn unknown_operation(field: &str) -> Self {
        Self {
            code: GraphqlErrorCode::UnknownOperation,
            message: format!("Unknown operation: {}", field),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self {
            code: GraphqlErrorCode::InvalidArgument,
            message: reason.into(),
        }
    }

    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        self.code.code()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for GraphqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message)
    }
}

impl std::error::Error for GraphqlError {}

/// Result type for schema layer operations
pub type GraphqlResult<T> = Result<T, GraphqlError>;
