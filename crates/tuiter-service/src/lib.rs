//! # tuiter-service
//!
//! Application layer containing business logic, services, and DTOs.
//! Services borrow a [`ServiceContext`] and reach every store through the
//! ports it holds, so the whole layer runs against in-memory fakes in
//! tests and against Postgres/Redis in production.

pub mod dto;
pub mod services;


pub use dto::*;
pub use services::*;
