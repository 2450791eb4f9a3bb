//! Transport layer for the API server.
//!
//! Binds the HTTP listener, layers CORS and request tracing over the
//! application router, and serves until a shutdown signal arrives.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
