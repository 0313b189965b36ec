//! Review domain types.

mod review;

pub use review::{PENDING_ASSIGNMENT, Review, ReviewState};
