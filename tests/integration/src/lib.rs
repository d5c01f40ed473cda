//! Integration test utilities for the Tuiter backend
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API.

pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
