//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Bookmark, Follow, Group, GroupMessage, Message, Reaction, ReactionKind, Story, Tuit,
    TuitStats, User,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// List all users
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user with their password hash
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user's profile
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Delete a user
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>>;
}

// ============================================================================
// Tuit Repository
// ============================================================================

#[async_trait]
pub trait TuitRepository: Send + Sync {
    /// Find tuit by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Tuit>>;

    /// List all tuits, newest first
    async fn find_all(&self) -> RepoResult<Vec<Tuit>>;

    /// List tuits posted by a user, newest first
    async fn find_by_author(&self, user_id: Snowflake) -> RepoResult<Vec<Tuit>>;

    /// Create a new tuit
    async fn create(&self, tuit: &Tuit) -> RepoResult<()>;

    /// Update the tuit body
    async fn update(&self, tuit: &Tuit) -> RepoResult<()>;

    /// Delete a tuit
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Atomically add deltas to the cached like/dislike counters.
    ///
    /// Single conditional write; each counter clamps at zero. This is the
    /// only sanctioned way to move the counters on the toggle path, so two
    /// concurrent toggles compose instead of overwriting each other.
    async fn apply_stats_delta(
        &self,
        id: Snowflake,
        likes_delta: i32,
        dislikes_delta: i32,
    ) -> RepoResult<()>;

    /// Overwrite the full cached stats block (recovery/rebuild path)
    async fn update_stats(&self, id: Snowflake, stats: &TuitStats) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find one user's reaction of a kind on a tuit
    async fn find(
        &self,
        user_id: Snowflake,
        tuit_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<Option<Reaction>>;

    /// Users who hold an edge of `kind` on the tuit
    async fn find_reactors(&self, tuit_id: Snowflake, kind: ReactionKind) -> RepoResult<Vec<User>>;

    /// Tuits the user holds an edge of `kind` on. Edges whose tuit has been
    /// deleted are filtered out, never surfaced as holes.
    async fn find_reacted_tuits(
        &self,
        user_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<Vec<Tuit>>;

    /// Insert the edge unless it already exists. Returns whether a row was
    /// actually inserted, which is what makes retried toggles idempotent.
    async fn create(&self, reaction: &Reaction) -> RepoResult<bool>;

    /// Delete the edge. Returns whether a row was actually removed.
    async fn delete(
        &self,
        user_id: Snowflake,
        tuit_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<bool>;

    /// Count edges of `kind` on a tuit
    async fn count(&self, tuit_id: Snowflake, kind: ReactionKind) -> RepoResult<i64>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert the follow edge unless it already exists. Returns whether a
    /// row was inserted.
    async fn create(&self, follow: &Follow) -> RepoResult<bool>;

    /// Delete the follow edge. Returns whether a row was removed.
    async fn delete(&self, user_following: Snowflake, user_followed: Snowflake)
        -> RepoResult<bool>;

    /// Users that `user_id` follows
    async fn find_following(&self, user_id: Snowflake) -> RepoResult<Vec<User>>;

    /// Users that follow `user_id`
    async fn find_followers(&self, user_id: Snowflake) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Bookmark Repository
// ============================================================================

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Insert the bookmark unless it already exists. Returns whether a row
    /// was inserted.
    async fn create(&self, bookmark: &Bookmark) -> RepoResult<bool>;

    /// Delete the bookmark. Returns whether a row was removed.
    async fn delete(&self, user_id: Snowflake, tuit_id: Snowflake) -> RepoResult<bool>;

    /// Tuits bookmarked by the user; dangling references are filtered out
    async fn find_tuits_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Tuit>>;

    /// Users who bookmarked the tuit
    async fn find_users_by_tuit(&self, tuit_id: Snowflake) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>>;

    /// Messages sent by `sender_id` to `recipient_id`, oldest first
    async fn find_between(
        &self,
        sender_id: Snowflake,
        recipient_id: Snowflake,
    ) -> RepoResult<Vec<Message>>;

    /// Create a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Update message body / pinned flag
    async fn update(&self, message: &Message) -> RepoResult<()>;

    /// Delete a message
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Story Repository
// ============================================================================

#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Find story by ID (viewer list included)
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Story>>;

    /// List all stories, newest first
    async fn find_all(&self) -> RepoResult<Vec<Story>>;

    /// Stories authored by the user
    async fn find_by_author(&self, user_id: Snowflake) -> RepoResult<Vec<Story>>;

    /// Stories the user may view: public ones plus those naming the user
    /// in the viewer list (and the user's own)
    async fn find_visible_to(&self, user_id: Snowflake) -> RepoResult<Vec<Story>>;

    /// Create a new story with its viewer list
    async fn create(&self, story: &Story) -> RepoResult<()>;

    /// Delete a story
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Delete every story authored by the user, returning how many went
    async fn delete_by_author(&self, user_id: Snowflake) -> RepoResult<u64>;
}

// ============================================================================
// Group Repository
// ============================================================================

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Find group by ID (member list included)
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Group>>;

    /// Groups the user is a member of
    async fn find_by_member(&self, user_id: Snowflake) -> RepoResult<Vec<Group>>;

    /// Check group membership
    async fn is_member(&self, group_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Create a new group with its member list
    async fn create(&self, group: &Group) -> RepoResult<()>;

    /// Update group name / member list
    async fn update(&self, group: &Group) -> RepoResult<()>;

    /// Delete a group
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Group Message Repository
// ============================================================================

#[async_trait]
pub trait GroupMessageRepository: Send + Sync {
    /// Find group message by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<GroupMessage>>;

    /// Messages sent to the group, oldest first
    async fn find_by_group(&self, group_id: Snowflake) -> RepoResult<Vec<GroupMessage>>;

    /// Create a new group message
    async fn create(&self, message: &GroupMessage) -> RepoResult<()>;

    /// Delete a group message
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}
