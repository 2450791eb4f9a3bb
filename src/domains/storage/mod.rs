//! Storage domain module.
//!
//! Persistence for the flat JSON collections backing the API. Each
//! collection lives in its own file as a top-level JSON array.

mod error;
mod json_file;

pub use error::StorageError;
pub use json_file::JsonFileStore;
