//! Domains module containing business logic organized by bounded contexts.
//!
//! - **storage**: whole-file JSON collection persistence
//! - **resources**: titled/typed records with CRUD operations
//! - **ratings**: 1-5 scores attached to resource IDs

mod json;
pub mod ratings;
pub mod resources;
pub mod storage;
