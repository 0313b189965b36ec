//! Review API client module.
//!
//! Provides `ReviewClient` for the activity review endpoints, with the auth
//! token taken from the `token` cookie.

mod client;
pub mod error;
#[cfg(test)]
mod mock;

pub use client::{FILTER_ANY, RequestProps, ReviewClient, ReviewerFilter, UpdateReview};
pub use error::{ApiError, Result};
#[cfg(test)]
pub use mock::ReviewMockServer;
