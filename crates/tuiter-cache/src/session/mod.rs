//! Session storage module.
//!
//! Provides Redis-backed storage for bearer-token sessions.

mod session_store;

pub use session_store::RedisSessionStore;
