//! shelfql - a minimal product catalog manager
//!
//! A GraphQL-style operation endpoint over an in-memory product store,
//! plus the client library and view controller that drive it.

pub mod cli;
pub mod client;
pub mod graphql;
pub mod observability;
pub mod resolver;
pub mod server;
pub mod store;
pub mod view;
