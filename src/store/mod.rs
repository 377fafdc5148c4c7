//! Data Store Collaborator for shelfql
//!
//! An in-memory document collection of Products behind a single lock.
//!
//! # Design Principles
//!
//! - Single global mutex for all operations
//! - Store-native order is insertion order
//! - Identifiers are assigned by the store at insert, never by callers
//! - Partial updates apply only the supplied fields

mod collection;
mod document;
mod errors;
mod sorter;

pub use collection::ProductStore;
pub use document::{Product, ProductDraft, ProductPatch};
pub use errors::{StoreError, StoreErrorCode, StoreResult};
pub use sorter::{ProductSorter, SortDirection, SortField};
