//! Resolver error types
//!
//! Three classes: invalid argument (bad sort field), not found
//! (update/delete on a missing id), and pass-through store faults. The
//! messages are the user-facing strings; codes stay server-side.

use std::fmt;

use crate::store::StoreError;

/// Resolver error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverErrorCode {
    /// Argument outside the allowed value set
    InvalidArgument,
    /// Id does not resolve to a product
    NotFound,
    /// Pass-through fault from the store
    StoreFault,
}

impl ResolverErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ResolverErrorCode::InvalidArgument => "SHELF_INVALID_ARGUMENT",
            ResolverErrorCode::NotFound => "SHELF_NOT_FOUND",
            ResolverErrorCode::StoreFault => "SHELF_STORE_FAULT",
        }
    }
}

/// Resolver error
#[derive(Debug, Clone)]
pub struct ResolverError {
    code: ResolverErrorCode,
    message: String,
}

impl ResolverError {
    /// Sort field outside {title, category, price, inStock}
    pub fn invalid_sort_field() -> Self {
        Self {
            code: ResolverErrorCode::InvalidArgument,
            message: "Invalid sort field".to_string(),
        }
    }

    /// Update or delete on an id with no product
    pub fn not_found() -> Self {
        Self {
            code: ResolverErrorCode::NotFound,
            message: "Product not found".to_string(),
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

impl From<StoreError> for ResolverError {
    fn from(err: StoreError) -> Self {
        Self {
            code: ResolverErrorCode::StoreFault,
            message: err.message().to_string(),
        }
    }
}

impl fmt::Display for ResolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message)
    }
}

impl std::error::Error for ResolverError {}

/// Result type for resolver operations
pub type ResolverResult<T> = Result<T, ResolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sort_field_message() {
        let err = ResolverError::invalid_sort_field();
        assert_eq!(err.code(), "SHELF_INVALID_ARGUMENT");
        assert_eq!(err.message(), "Invalid sort field");
    }

    #[test]
    fn test_not_found_message() {
        let err = ResolverError::not_found();
        assert_eq!(err.code(), "SHELF_NOT_FOUND");
        assert_eq!(err.message(), "Product not found");
    }

    #[test]
    fn test_store_fault_pass_through() {
        let err = ResolverError::from(StoreError::lock_poisoned());
        assert_eq!(err.code(), "SHELF_STORE_FAULT");
        assert!(err.message().contains("lock poisoned"));
    }
}
