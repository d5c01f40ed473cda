//! Session storage in Redis.
//!
//! Sessions are opaque bearer tokens mapped to the signed-in identity, with
//! automatic expiration so abandoned sessions age out on their own.

use async_trait::async_trait;
use redis::AsyncCommands;
use tuiter_core::{DomainError, RepoResult, Session, SessionStore, Snowflake};

use crate::pool::{RedisPool, RedisPoolError, RedisResult};

/// Key prefix for session tokens
const SESSION_PREFIX: &str = "session:";

/// Key prefix for the per-user set of live tokens
const USER_SESSIONS_PREFIX: &str = "user_sessions:";

/// Default session TTL (24 hours)
const DEFAULT_SESSION_TTL: u64 = 24 * 60 * 60;

fn map_cache_error(e: RedisPoolError) -> DomainError {
    DomainError::CacheError(e.to_string())
}

/// Redis-backed session store
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl RedisSessionStore {
    /// Create a new session store with the default TTL
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_SESSION_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate Redis key for a session token
    fn key(token: &str) -> String {
        format!("{SESSION_PREFIX}{token}")
    }

    /// Generate Redis key for a user's token set
    fn user_key(user_id: Snowflake) -> String {
        format!("{USER_SESSIONS_PREFIX}{user_id}")
    }

    async fn store(&self, token: &str, session: &Session) -> RedisResult<()> {
        let key = Self::key(token);
        self.pool.set(&key, session, Some(self.ttl_seconds)).await?;

        // Also add to the user's token set so delete_all can find every session
        let user_key = Self::user_key(session.user_id);
        let mut conn = self.pool.get().await?;
        conn.sadd::<_, _, ()>(&user_key, token).await?;
        drop(conn);
        self.pool.expire(&user_key, self.ttl_seconds).await?;

        tracing::debug!(
            user_id = %session.user_id,
            username = %session.username,
            "Stored session"
        );

        Ok(())
    }

    async fn fetch(&self, token: &str) -> RedisResult<Option<Session>> {
        let key = Self::key(token);
        self.pool.get_value(&key).await
    }

    async fn revoke(&self, token: &str) -> RedisResult<bool> {
        // First get the session to find the owning user
        if let Some(session) = self.fetch(token).await? {
            let user_key = Self::user_key(session.user_id);
            let mut conn = self.pool.get().await?;
            conn.srem::<_, _, ()>(&user_key, token).await?;
        }

        let key = Self::key(token);
        let deleted = self.pool.delete(&key).await?;

        if deleted {
            tracing::debug!("Revoked session");
        }

        Ok(deleted)
    }

    async fn revoke_all_for_user(&self, user_id: Snowflake) -> RedisResult<u64> {
        let user_key = Self::user_key(user_id);
        let mut conn = self.pool.get().await?;

        // Tokens in the set whose session key already expired do not count
        let tokens: Vec<String> = conn.smembers(&user_key).await?;
        let mut count = 0u64;

        if !tokens.is_empty() {
            let keys: Vec<String> = tokens.iter().map(|t| Self::key(t)).collect();
            let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
            count = self.pool.delete_many(&key_refs).await? as u64;
        }

        // Delete the user's token set
        conn.del::<_, ()>(&user_key).await?;

        tracing::info!(
            user_id = %user_id,
            count = count,
            "Revoked all sessions for user"
        );

        Ok(count)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn put(&self, token: &str, session: &Session) -> RepoResult<()> {
        self.store(token, session).await.map_err(map_cache_error)
    }

    async fn get(&self, token: &str) -> RepoResult<Option<Session>> {
        self.fetch(token).await.map_err(map_cache_error)
    }

    async fn delete(&self, token: &str) -> RepoResult<()> {
        self.revoke(token).await.map_err(map_cache_error)?;
        Ok(())
    }

    async fn delete_all(&self, user_id: Snowflake) -> RepoResult<u64> {
        self.revoke_all_for_user(user_id)
            .await
            .map_err(map_cache_error)
    }
}
