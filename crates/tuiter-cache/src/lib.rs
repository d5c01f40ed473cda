//! # tuiter-cache
//!
//! Redis caching layer for sessions and pub/sub notifications.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: Bearer-token sessions with automatic expiration
//! - **Pub/Sub**: Notification fan-out to per-user channels
//!
//! ## Example
//!
//! ```ignore
//! use tuiter_cache::{Publisher, RedisPool, RedisPoolConfig, RedisSessionStore};
//! use tuiter_core::{Session, SessionStore, Snowflake};
//!
//! // Create Redis pool
//! let config = RedisPoolConfig::default();
//! let pool = RedisPool::new(config)?;
//!
//! // Create stores
//! let sessions = RedisSessionStore::new(pool.clone());
//! let publisher = Publisher::new(pool.clone());
//!
//! // Store a session
//! let session = Session::new(user_id, "alice".to_string());
//! sessions.put(&token, &session).await?;
//! ```

pub mod pool;
pub mod pubsub;
pub mod session;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export session types
pub use session::RedisSessionStore;

// Re-export pubsub types
pub use pubsub::{user_channel, Publisher};
