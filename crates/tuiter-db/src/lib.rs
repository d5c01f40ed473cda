//! # tuiter-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `tuiter-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The tuit counters (likes/dislikes/replies/retuits) are denormalized onto
//! the tuits row; the reaction repositories treat the per-user edges as the
//! source of truth and `PgTuitRepository::apply_stats_delta` is the only
//! write path that moves the counters during a toggle.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tuiter_db::pool::{create_pool, DatabaseConfig};
//! use tuiter_db::repositories::PgTuitRepository;
//! use tuiter_core::traits::TuitRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let tuit_repo = PgTuitRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgBookmarkRepository, PgFollowRepository, PgGroupMessageRepository, PgGroupRepository,
    PgMessageRepository, PgReactionRepository, PgStoryRepository, PgTuitRepository,
    PgUserRepository,
};
