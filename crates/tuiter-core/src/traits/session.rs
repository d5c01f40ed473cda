//! Session store port - ambient identity keyed by an opaque token
//!
//! Sessions are created at signup/login and destroyed at logout. The token
//! itself is opaque to the domain; the store maps it to the session data
//! for as long as the session lives.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::repositories::RepoResult;
use crate::value_objects::Snowflake;

/// Identity attached to one active session token.
///
/// Serialized form is the wire format the store persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Snowflake,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a session for a user
    pub fn new(user_id: Snowflake, username: String) -> Self {
        Self {
            user_id,
            username,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a session under the given token
    async fn put(&self, token: &str, session: &Session) -> RepoResult<()>;

    /// Look up the session for a token, if it is still live
    async fn get(&self, token: &str) -> RepoResult<Option<Session>>;

    /// Destroy one session
    async fn delete(&self, token: &str) -> RepoResult<()>;

    /// Destroy every session belonging to a user, returning how many went
    async fn delete_all(&self, user_id: Snowflake) -> RepoResult<u64>;
}
