//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{
    auth, bookmarks, engagement, follows, group_messages, groups, health, messages, stories,
    tuits, users,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which gets
/// its own middleware stack)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(tuit_routes())
        .merge(message_routes())
        .merge(story_routes())
        .merge(group_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/profile", post(auth::profile))
}

/// User routes, including the per-user subresources
fn user_routes() -> Router<AppState> {
    Router::new()
        // User CRUD
        .route("/users", post(users::create_user))
        .route("/users", get(users::list_users))
        .route("/users/:uid", get(users::get_user))
        .route("/users/:uid", put(users::update_user))
        .route("/users/:uid", delete(users::delete_user))
        // Engagement toggles and per-user reaction lists
        .route("/users/:uid/likes/:tid", put(engagement::toggle_like))
        .route("/users/:uid/dislikes/:tid", put(engagement::toggle_dislike))
        .route("/users/:uid/likes", get(engagement::list_liked_tuits))
        .route("/users/:uid/dislikes", get(engagement::list_disliked_tuits))
        // Tuits authored by the user
        .route("/users/:uid/tuits", post(tuits::create_tuit))
        .route("/users/:uid/tuits", get(tuits::list_user_tuits))
        // Follow graph
        .route("/users/:uid/follows/:ouid", post(follows::follow_user))
        .route("/users/:uid/follows/:ouid", delete(follows::unfollow_user))
        .route("/users/:uid/follows", get(follows::list_following))
        .route("/users/:uid/followers", get(follows::list_followers))
        // Bookmarks
        .route("/users/:uid/bookmarks/:tid", post(bookmarks::add_bookmark))
        .route("/users/:uid/bookmarks/:tid", delete(bookmarks::remove_bookmark))
        .route("/users/:uid/bookmarks", get(bookmarks::list_bookmarks))
        // Direct messages
        .route("/users/:uid/messages/:ruid", post(messages::send_message))
        .route("/users/:uid/messages/:ruid", get(messages::get_conversation))
        .route("/users/:uid/messages", post(messages::broadcast_message))
        // Stories
        .route("/users/:uid/stories", post(stories::create_story))
        .route("/users/:uid/stories", get(stories::list_visible_stories))
        .route("/users/:uid/stories", delete(stories::delete_user_stories))
        .route("/users/:uid/my-stories", get(stories::list_my_stories))
        // Groups
        .route("/users/:uid/groups", post(groups::create_group))
        .route("/users/:uid/groups", get(groups::list_user_groups))
}

/// Tuit routes
fn tuit_routes() -> Router<AppState> {
    Router::new()
        .route("/tuits", get(tuits::list_tuits))
        .route("/tuits/:tid", get(tuits::get_tuit))
        .route("/tuits/:tid", put(tuits::update_tuit))
        .route("/tuits/:tid", delete(tuits::delete_tuit))
        // Who reacted / bookmarked
        .route("/tuits/:tid/likes", get(engagement::list_tuit_likes))
        .route("/tuits/:tid/dislikes", get(engagement::list_tuit_dislikes))
        .route("/tuits/:tid/bookmarks", get(bookmarks::list_bookmarkers))
}

/// Direct message routes addressed by message id
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages/:mid", get(messages::get_message))
        .route("/messages/:mid", put(messages::update_message))
        .route("/messages/:mid", delete(messages::delete_message))
}

/// Story routes
fn story_routes() -> Router<AppState> {
    Router::new()
        .route("/stories", get(stories::list_stories))
        .route("/stories/:sid", get(stories::get_story))
        .route("/stories/:sid", delete(stories::delete_story))
}

/// Group routes
fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/groups/:gid", get(groups::get_group))
        .route("/groups/:gid", put(groups::update_group))
        .route("/groups/:gid", delete(groups::delete_group))
        // Group messages
        .route(
            "/groups/:gid/users/:uid/messages",
            post(group_messages::send_group_message),
        )
        .route("/groups/:gid/messages", get(group_messages::list_group_messages))
        .route(
            "/groups/:gid/messages/:mid",
            get(group_messages::get_group_message),
        )
        .route(
            "/groups/:gid/messages/:mid",
            delete(group_messages::delete_group_message),
        )
}
