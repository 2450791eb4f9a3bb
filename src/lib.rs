//! Resource API Library
//!
//! A small REST API exposing CRUD operations over a flat JSON collection of
//! "resources", plus append-only ratings attached to them.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, shared server state and the HTTP transport
//! - **domains**: business logic organized by bounded contexts
//!   - **storage**: whole-file JSON collection persistence
//!   - **resources**: titled/typed records with list, get, create, update, delete
//!   - **ratings**: 1-5 scores attached to resource IDs
//!
//! # Example
//!
//! ```rust,no_run
//! use resource_api::core::{ApiServer, Config, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = HttpTransport::new(config.http.clone());
//!     let server = ApiServer::new(config).await?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{ApiServer, Config, Error, Result};
