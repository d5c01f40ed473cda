//! Service context - dependency container for services
//!
//! Holds the repository, session, and notification ports plus the id
//! generator. Everything is a trait object, so services never see a
//! concrete store; the API crate wires the real implementations at
//! startup and tests wire in-memory fakes.

use std::sync::Arc;

use tuiter_core::traits::{
    BookmarkRepository, FollowRepository, GroupMessageRepository, GroupRepository,
    MessageRepository, Notifier, ReactionRepository, SessionStore, StoryRepository,
    TuitRepository, UserRepository,
};
use tuiter_core::SnowflakeGenerator;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    tuit_repo: Arc<dyn TuitRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    bookmark_repo: Arc<dyn BookmarkRepository>,
    message_repo: Arc<dyn MessageRepository>,
    story_repo: Arc<dyn StoryRepository>,
    group_repo: Arc<dyn GroupRepository>,
    group_message_repo: Arc<dyn GroupMessageRepository>,

    // Sessions
    session_store: Arc<dyn SessionStore>,

    // Push notifications
    notifier: Arc<dyn Notifier>,

    // Id generation
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the tuit repository
    pub fn tuit_repo(&self) -> &dyn TuitRepository {
        self.tuit_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the bookmark repository
    pub fn bookmark_repo(&self) -> &dyn BookmarkRepository {
        self.bookmark_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the story repository
    pub fn story_repo(&self) -> &dyn StoryRepository {
        self.story_repo.as_ref()
    }

    /// Get the group repository
    pub fn group_repo(&self) -> &dyn GroupRepository {
        self.group_repo.as_ref()
    }

    /// Get the group message repository
    pub fn group_message_repo(&self) -> &dyn GroupMessageRepository {
        self.group_message_repo.as_ref()
    }

    // === Sessions ===

    /// Get the session store
    pub fn session_store(&self) -> &dyn SessionStore {
        self.session_store.as_ref()
    }

    // === Push notifications ===

    /// Get the notifier
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    // === Id generation ===

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> tuiter_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("session_store", &"...")
            .field("notifier", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with explicit dependencies
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    tuit_repo: Option<Arc<dyn TuitRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    bookmark_repo: Option<Arc<dyn BookmarkRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    story_repo: Option<Arc<dyn StoryRepository>>,
    group_repo: Option<Arc<dyn GroupRepository>>,
    group_message_repo: Option<Arc<dyn GroupMessageRepository>>,
    session_store: Option<Arc<dyn SessionStore>>,
    notifier: Option<Arc<dyn Notifier>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn tuit_repo(mut self, repo: Arc<dyn TuitRepository>) -> Self {
        self.tuit_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn bookmark_repo(mut self, repo: Arc<dyn BookmarkRepository>) -> Self {
        self.bookmark_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn story_repo(mut self, repo: Arc<dyn StoryRepository>) -> Self {
        self.story_repo = Some(repo);
        self
    }

    pub fn group_repo(mut self, repo: Arc<dyn GroupRepository>) -> Self {
        self.group_repo = Some(repo);
        self
    }

    pub fn group_message_repo(mut self, repo: Arc<dyn GroupMessageRepository>) -> Self {
        self.group_message_repo = Some(repo);
        self
    }

    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        fn missing(name: &str) -> super::error::ServiceError {
            super::error::ServiceError::internal(format!("{name} is required"))
        }

        Ok(ServiceContext {
            user_repo: self.user_repo.ok_or_else(|| missing("user_repo"))?,
            tuit_repo: self.tuit_repo.ok_or_else(|| missing("tuit_repo"))?,
            reaction_repo: self.reaction_repo.ok_or_else(|| missing("reaction_repo"))?,
            follow_repo: self.follow_repo.ok_or_else(|| missing("follow_repo"))?,
            bookmark_repo: self.bookmark_repo.ok_or_else(|| missing("bookmark_repo"))?,
            message_repo: self.message_repo.ok_or_else(|| missing("message_repo"))?,
            story_repo: self.story_repo.ok_or_else(|| missing("story_repo"))?,
            group_repo: self.group_repo.ok_or_else(|| missing("group_repo"))?,
            group_message_repo: self
                .group_message_repo
                .ok_or_else(|| missing("group_message_repo"))?,
            session_store: self.session_store.ok_or_else(|| missing("session_store"))?,
            notifier: self.notifier.ok_or_else(|| missing("notifier"))?,
            snowflake_generator: self
                .snowflake_generator
                .ok_or_else(|| missing("snowflake_generator"))?,
        })
    }
}
