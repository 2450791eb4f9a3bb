//! Resources domain module.
//!
//! Resources are generic titled/typed JSON records kept as a single array
//! in one collection file.
//!
//! ## Architecture
//!
//! - `model.rs` - `Resource` record and `ResourceFilter`
//! - `service.rs` - list, lookup, create, update, delete
//! - `handlers.rs` - axum handlers mapping HTTP onto the service

mod error;
mod handlers;
mod model;
mod service;

pub use error::ResourceError;
pub use handlers::*;
pub use model::{ID_FIELD, Resource, ResourceFilter};
pub use service::ResourceService;
