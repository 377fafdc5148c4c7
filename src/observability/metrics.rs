//! Operation counters
//!
//! - Counters only, monotonic, reset on process start
//! - Thread-safe via relaxed atomics

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counter registry for the operation pipeline.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Successful query operations
    queries_executed: AtomicU64,
    /// Successful mutation operations
    mutations_executed: AtomicU64,
    /// Operations rejected at any stage
    operations_rejected: AtomicU64,
    /// Products created
    products_created: AtomicU64,
    /// Products updated
    products_updated: AtomicU64,
    /// Products deleted
    products_deleted: AtomicU64,
}

/// A point-in-time copy of all counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub queries_executed: u64,
    pub mutations_executed: u64,
    pub operations_rejected: u64,
    pub products_created: u64,
    pub products_updated: u64,
    pub products_deleted: u64,
}

impl MetricsRegistry {
    /// Create a new registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment successful queries
    pub fn inc_queries_executed(&self) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment successful mutations
    pub fn inc_mutations_executed(&self) {
        self.mutations_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment rejected operations
    pub fn inc_operations_rejected(&self) {
        self.operations_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment created products
    pub fn inc_products_created(&self) {
        self.products_created.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment updated products
    pub fn inc_products_updated(&self) {
        self.products_updated.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment deleted products
    pub fn inc_products_deleted(&self) {
        self.products_deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            mutations_executed: self.mutations_executed.load(Ordering::Relaxed),
            operations_rejected: self.operations_rejected.load(Ordering::Relaxed),
            products_created: self.products_created.load(Ordering::Relaxed),
            products_updated: self.products_updated.load(Ordering::Relaxed),
            products_deleted: self.products_deleted.load(Ordering::Relaxed),
        }
    }
}
