//! Ratings domain module.
//!
//! Ratings are 1-5 integer scores attached to a resource ID. They live in
//! their own collection file and are only ever appended. No check is made
//! that the referenced resource exists.

mod error;
mod handlers;
mod model;
mod service;

pub use error::RatingError;
pub use handlers::create_rating;
pub use model::{ANONYMOUS_USER, MAX_RATING, MIN_RATING, NewRating, Rating};
pub use service::RatingService;
