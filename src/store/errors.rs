//! Store error types
//!
//! The in-memory store has exactly one failure mode: a poisoned lock
//! after a panic elsewhere. It surfaces as an unclassified store fault.

use std::fmt;

/// Store error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// The global document lock was poisoned
    LockPoisoned,
}

impl StoreErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::LockPoisoned => "SHELF_STORE_LOCK_POISONED",
        }
    }
}

/// Store error
#[derive(Debug, Clone)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
}

impl StoreError {
    /// Create a lock-poisoned error
    pub fn lock_poisoned() -> Self {
        Self {
            code: StoreErrorCode::LockPoisoned,
            message: "Product collection lock poisoned".to_string(),
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

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message)
    }
}

impl std::error::Error for StoreError {}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
