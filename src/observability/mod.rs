//! Observability for shelfql
//!
//! Structured logging and operation counters.

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
