//! Client Library for shelfql
//!
//! A thin request wrapper: post an operation document to the single
//! endpoint, unwrap either the data payload or the first error message.
//! Typed wrappers cover the six contract operations and are the seam
//! (`CatalogApi`) the view controller is written against.

#[allow(clippy::module_inception)]
mod client;
mod errors;

pub use client::{CatalogApi, CatalogClient};
pub use errors::{ClientError, ClientResult};
