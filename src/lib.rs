//! Client library for activity review workflows.
//!
//! [`infra::api::ReviewClient`] talks to the review endpoints;
//! [`models::Review`] is the record it produces and consumes.

pub mod cli;
pub mod commands;
pub mod infra;
pub mod models;
pub mod shared;
