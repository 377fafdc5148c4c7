//! Resolver Layer for shelfql
//!
//! Maps the six contract operations onto the product store:
//! validation of the sort field, not-found translation for mutations on
//! missing ids, and pass-through of store faults.

mod dispatch;
mod errors;
mod handler;

pub use dispatch::Dispatcher;
pub use errors::{ResolverError, ResolverErrorCode, ResolverResult};
pub use handler::Resolvers;
