//! HTTP surface for shelfql
//!
//! A single POST endpoint for the operation contract plus a health
//! probe, served by axum.

mod config;
mod routes;
#[allow(clippy::module_inception)]
mod server;

pub use config::ServerConfig;
pub use routes::{graphql_routes, health_routes, GraphqlState};
pub use server::CatalogServer;
