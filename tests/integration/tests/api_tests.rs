//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let response = server.post("/api/auth/signup", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    // First signup
    server.post("/api/auth/signup", &request).await.unwrap();

    // Second signup with the same username
    let response = server.post("/api/auth/signup", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_signup_rejects_invalid_body() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = serde_json::json!({
        "username": "x",
        "email": "not-an-email",
        "password": "short",
    });

    let response = server.post("/api/auth/signup", &request).await.unwrap();
    let status = response.status();
    let body: ErrorResponse = response.json().await.unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Sign up first
    let signup_req = SignupRequest::unique();
    server.post("/api/auth/signup", &signup_req).await.unwrap();

    // Login
    let login_req = LoginRequest::from_signup(&signup_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, signup_req.username);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        username: "nonexistentuser".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Sign up
    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Logout
    let response = server
        .post_auth("/api/auth/logout", &auth.token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The token must no longer resolve
    let response = server
        .post_auth("/api/auth/profile", &auth.token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Sign up
    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Fetch profile
    let response = server
        .post_auth("/api/auth/profile", &auth.token, &())
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.username, signup_req.username);
}

#[tokio::test]
async fn test_profile_without_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/auth/profile", &()).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_user_without_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let response = server.post("/api/users", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, request.username);
    assert_eq!(user.email, request.email);
}

#[tokio::test]
async fn test_get_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = SignupRequest::unique();
    let response = server.post("/api/users", &request).await.unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/users/{}", created.id))
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.username, request.username);
}

#[tokio::test]
async fn test_me_resolves_to_session_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/users/me", &auth.token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
}

#[tokio::test]
async fn test_me_without_session_is_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/users/me").await.unwrap();
    let status = response.status();
    let body: ErrorResponse = response.json().await.unwrap();

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body.error.code, "UNAUTHORIZED");
}

#[tokio::test]
async fn test_update_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update_req = UpdateUserRequest {
        biography: Some("Updated bio".to_string()),
        first_name: Some("Test".to_string()),
        ..Default::default()
    };
    let response = server
        .put_auth("/api/users/me", &auth.token, &update_req)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.biography.as_deref(), Some("Updated bio"));
    assert_eq!(user.first_name.as_deref(), Some("Test"));
    // Untouched fields survive the update
    assert_eq!(user.username, signup_req.username);
}

#[tokio::test]
async fn test_delete_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = SignupRequest::unique();
    let response = server.post("/api/users", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!("/api/users/{}", user.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Verify deleted
    let response = server
        .get(&format!("/api/users/{}", user.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Tuit Tests
// ============================================================================

#[tokio::test]
async fn test_create_tuit() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let tuit_req = CreateTuitRequest::with_text("Hello, World!");
    let response = server
        .post_auth("/api/users/me/tuits", &auth.token, &tuit_req)
        .await
        .unwrap();
    let tuit: TuitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(tuit.tuit, "Hello, World!");
    assert_eq!(tuit.posted_by, auth.user.id);
    // A fresh tuit starts with zeroed counters
    assert_eq!(tuit.stats.likes, 0);
    assert_eq!(tuit.stats.dislikes, 0);
}

#[tokio::test]
async fn test_get_tuit() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let tuit_req = CreateTuitRequest::unique();
    let response = server
        .post_auth("/api/users/me/tuits", &auth.token, &tuit_req)
        .await
        .unwrap();
    let created: TuitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/tuits/{}", created.id))
        .await
        .unwrap();
    let tuit: TuitResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(tuit.id, created.id);
    assert_eq!(tuit.tuit, tuit_req.tuit);
}

#[tokio::test]
async fn test_list_user_tuits() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    for i in 0..3 {
        let tuit_req = CreateTuitRequest::with_text(&format!("Tuit {}", i));
        server
            .post_auth("/api/users/me/tuits", &auth.token, &tuit_req)
            .await
            .unwrap();
    }

    let response = server
        .get(&format!("/api/users/{}/tuits", auth.user.id))
        .await
        .unwrap();
    let tuits: Vec<TuitResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(tuits.len(), 3);
}

#[tokio::test]
async fn test_update_tuit() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let tuit_req = CreateTuitRequest::unique();
    let response = server
        .post_auth("/api/users/me/tuits", &auth.token, &tuit_req)
        .await
        .unwrap();
    let created: TuitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update_req = UpdateTuitRequest {
        tuit: "Edited text".to_string(),
    };
    let response = server
        .put(&format!("/api/tuits/{}", created.id), &update_req)
        .await
        .unwrap();
    let updated: TuitResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.tuit, "Edited text");
}

#[tokio::test]
async fn test_delete_tuit() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let tuit_req = CreateTuitRequest::unique();
    let response = server
        .post_auth("/api/users/me/tuits", &auth.token, &tuit_req)
        .await
        .unwrap();
    let tuit: TuitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!("/api/tuits/{}", tuit.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Verify deleted
    let response = server
        .get(&format!("/api/tuits/{}", tuit.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Engagement Tests
// ============================================================================

#[tokio::test]
async fn test_like_toggle_moves_counter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let tuit_req = CreateTuitRequest::unique();
    let response = server
        .post_auth("/api/users/me/tuits", &auth.token, &tuit_req)
        .await
        .unwrap();
    let tuit: TuitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Like: the toggle answers with a bare 200 and no payload
    let response = server
        .put_auth(&format!("/api/users/me/likes/{}", tuit.id), &auth.token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // A fresh read sees the counter
    let response = server
        .get(&format!("/api/tuits/{}", tuit.id))
        .await
        .unwrap();
    let fetched: TuitResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.stats.likes, 1);

    // Like again: the edge toggles off and the counter returns to zero
    let response = server
        .put_auth(&format!("/api/users/me/likes/{}", tuit.id), &auth.token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/tuits/{}", tuit.id))
        .await
        .unwrap();
    let fetched: TuitResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.stats.likes, 0);
}

#[tokio::test]
async fn test_dislike_toggle_moves_counter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let tuit_req = CreateTuitRequest::unique();
    let response = server
        .post_auth("/api/users/me/tuits", &auth.token, &tuit_req)
        .await
        .unwrap();
    let tuit: TuitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/users/me/dislikes/{}", tuit.id),
            &auth.token,
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/tuits/{}", tuit.id))
        .await
        .unwrap();
    let fetched: TuitResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.stats.dislikes, 1);
}

#[tokio::test]
async fn test_like_then_dislike_switches() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let tuit_req = CreateTuitRequest::unique();
    let response = server
        .post_auth("/api/users/me/tuits", &auth.token, &tuit_req)
        .await
        .unwrap();
    let tuit: TuitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let like_path = format!("/api/users/me/likes/{}", tuit.id);
    let dislike_path = format!("/api/users/me/dislikes/{}", tuit.id);

    let response = server.put_auth(&like_path, &auth.token, &()).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Disliking a liked tuit clears the like
    let response = server
        .put_auth(&dislike_path, &auth.token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/tuits/{}", tuit.id))
        .await
        .unwrap();
    let fetched: TuitResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.stats.likes, 0);
    assert_eq!(fetched.stats.dislikes, 1);
}

#[tokio::test]
async fn test_explicit_uid_toggle_needs_no_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let tuit_req = CreateTuitRequest::unique();
    let response = server
        .post_auth("/api/users/me/tuits", &auth.token, &tuit_req)
        .await
        .unwrap();
    let tuit: TuitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // A concrete user id in the path resolves without any session
    let response = server
        .put(
            &format!("/api/users/{}/likes/{}", auth.user.id, tuit.id),
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/tuits/{}", tuit.id))
        .await
        .unwrap();
    let fetched: TuitResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.stats.likes, 1);
}

#[tokio::test]
async fn test_me_toggle_without_session_is_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let tuit_req = CreateTuitRequest::unique();
    let response = server
        .post_auth("/api/users/me/tuits", &auth.token, &tuit_req)
        .await
        .unwrap();
    let tuit: TuitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put(&format!("/api/users/me/likes/{}", tuit.id), &())
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorResponse = response.json().await.unwrap();

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body.error.code, "UNAUTHORIZED");

    // The rejected toggle must not have moved the counter
    let response = server
        .get(&format!("/api/tuits/{}", tuit.id))
        .await
        .unwrap();
    let fetched: TuitResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.stats.likes, 0);
}

#[tokio::test]
async fn test_like_missing_tuit_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth("/api/users/me/likes/999999999999", &auth.token, &())
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorResponse = response.json().await.unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error.code, "UNKNOWN_TUIT");
}

#[tokio::test]
async fn test_reaction_listings() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let tuit_req = CreateTuitRequest::unique();
    let response = server
        .post_auth("/api/users/me/tuits", &auth.token, &tuit_req)
        .await
        .unwrap();
    let tuit: TuitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(&format!("/api/users/me/likes/{}", tuit.id), &auth.token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // The tuit lists its likers
    let response = server
        .get(&format!("/api/tuits/{}/likes", tuit.id))
        .await
        .unwrap();
    let likers: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(likers.iter().any(|u| u.id == auth.user.id));

    // The user lists their liked tuits
    let response = server
        .get_auth("/api/users/me/likes", &auth.token)
        .await
        .unwrap();
    let liked: Vec<TuitResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(liked.iter().any(|t| t.id == tuit.id));
}

// ============================================================================
// Follow Tests
// ============================================================================

#[tokio::test]
async fn test_follow_and_listings() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let other_req = SignupRequest::unique();
    let response = server.post("/api/users", &other_req).await.unwrap();
    let other: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Follow
    let response = server
        .post_auth(
            &format!("/api/users/me/follows/{}", other.id),
            &auth.token,
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Appears in both listings
    let response = server
        .get_auth("/api/users/me/follows", &auth.token)
        .await
        .unwrap();
    let following: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(following.iter().any(|u| u.id == other.id));

    let response = server
        .get(&format!("/api/users/{}/followers", other.id))
        .await
        .unwrap();
    let followers: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(followers.iter().any(|u| u.id == auth.user.id));
}

#[tokio::test]
async fn test_follow_self_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/users/me/follows/{}", auth.user.id),
            &auth.token,
            &(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorResponse = response.json().await.unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error.code, "SELF_FOLLOW");
}

#[tokio::test]
async fn test_duplicate_follow_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let other_req = SignupRequest::unique();
    let response = server.post("/api/users", &other_req).await.unwrap();
    let other: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/users/me/follows/{}", other.id);
    let response = server.post_auth(&path, &auth.token, &()).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.post_auth(&path, &auth.token, &()).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_unfollow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let other_req = SignupRequest::unique();
    let response = server.post("/api/users", &other_req).await.unwrap();
    let other: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/users/me/follows/{}", other.id);
    let response = server.post_auth(&path, &auth.token, &()).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&path, &auth.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/users/me/follows", &auth.token)
        .await
        .unwrap();
    let following: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!following.iter().any(|u| u.id == other.id));
}

// ============================================================================
// Bookmark Tests
// ============================================================================

#[tokio::test]
async fn test_bookmark_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let tuit_req = CreateTuitRequest::unique();
    let response = server
        .post_auth("/api/users/me/tuits", &auth.token, &tuit_req)
        .await
        .unwrap();
    let tuit: TuitResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Add
    let path = format!("/api/users/me/bookmarks/{}", tuit.id);
    let response = server.post_auth(&path, &auth.token, &()).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Listed from both sides
    let response = server
        .get_auth("/api/users/me/bookmarks", &auth.token)
        .await
        .unwrap();
    let bookmarks: Vec<TuitResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(bookmarks.iter().any(|t| t.id == tuit.id));

    let response = server
        .get(&format!("/api/tuits/{}/bookmarks", tuit.id))
        .await
        .unwrap();
    let bookmarkers: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(bookmarkers.iter().any(|u| u.id == auth.user.id));

    // Remove
    let response = server.delete_auth(&path, &auth.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/users/me/bookmarks", &auth.token)
        .await
        .unwrap();
    let bookmarks: Vec<TuitResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!bookmarks.iter().any(|t| t.id == tuit.id));
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_send_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let other_req = SignupRequest::unique();
    let response = server.post("/api/users", &other_req).await.unwrap();
    let other: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let message_req = SendMessageRequest::simple("Hello there");
    let response = server
        .post_auth(
            &format!("/api/users/me/messages/{}", other.id),
            &auth.token,
            &message_req,
        )
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(message.message, "Hello there");
    assert_eq!(message.sender, auth.user.id);
    assert_eq!(message.recipient, other.id);
    assert!(!message.pinned);
}

#[tokio::test]
async fn test_conversation_includes_both_directions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let alice_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &alice_req).await.unwrap();
    let alice: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let bob_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &bob_req).await.unwrap();
    let bob: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // One message each way
    server
        .post_auth(
            &format!("/api/users/me/messages/{}", bob.user.id),
            &alice.token,
            &SendMessageRequest::simple("From Alice"),
        )
        .await
        .unwrap();
    server
        .post_auth(
            &format!("/api/users/me/messages/{}", alice.user.id),
            &bob.token,
            &SendMessageRequest::simple("From Bob"),
        )
        .await
        .unwrap();

    let response = server
        .get_auth(
            &format!("/api/users/me/messages/{}", bob.user.id),
            &alice.token,
        )
        .await
        .unwrap();
    let conversation: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(conversation.len(), 2);
    assert!(conversation.iter().any(|m| m.message == "From Alice"));
    assert!(conversation.iter().any(|m| m.message == "From Bob"));
}

#[tokio::test]
async fn test_broadcast_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let mut recipient_ids = Vec::new();
    for _ in 0..2 {
        let req = SignupRequest::unique();
        let response = server.post("/api/users", &req).await.unwrap();
        let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        recipient_ids.push(user.id);
    }

    let broadcast_req = BroadcastMessageRequest {
        recipient_ids: recipient_ids.clone(),
        message: "Broadcast test".to_string(),
    };
    let response = server
        .post_auth("/api/users/me/messages", &auth.token, &broadcast_req)
        .await
        .unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(messages.len(), 2);
    for message in &messages {
        assert_eq!(message.sender, auth.user.id);
        assert!(recipient_ids.contains(&message.recipient));
    }
}

#[tokio::test]
async fn test_pin_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let other_req = SignupRequest::unique();
    let response = server.post("/api/users", &other_req).await.unwrap();
    let other: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/users/me/messages/{}", other.id),
            &auth.token,
            &SendMessageRequest::simple("Pin me"),
        )
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update_req = UpdateMessageRequest {
        pinned: Some(true),
        ..Default::default()
    };
    let response = server
        .put(&format!("/api/messages/{}", message.id), &update_req)
        .await
        .unwrap();
    let updated: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(updated.pinned);
    assert_eq!(updated.message, "Pin me");
}

#[tokio::test]
async fn test_delete_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let other_req = SignupRequest::unique();
    let response = server.post("/api/users", &other_req).await.unwrap();
    let other: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/users/me/messages/{}", other.id),
            &auth.token,
            &SendMessageRequest::simple("Short lived"),
        )
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!("/api/messages/{}", message.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/messages/{}", message.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Story Tests
// ============================================================================

#[tokio::test]
async fn test_create_story() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let story_req = CreateStoryRequest::unique();
    let response = server
        .post_auth("/api/users/me/stories", &auth.token, &story_req)
        .await
        .unwrap();
    let story: StoryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(story.posted_by, auth.user.id);
    assert_eq!(story.image, story_req.image);
}

#[tokio::test]
async fn test_visible_stories_include_own() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let story_req = CreateStoryRequest::unique();
    let response = server
        .post_auth("/api/users/me/stories", &auth.token, &story_req)
        .await
        .unwrap();
    let story: StoryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Inside a 24 hour window the fresh story is visible
    let response = server
        .get_auth("/api/users/me/stories?hours=24", &auth.token)
        .await
        .unwrap();
    let visible: Vec<StoryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(visible.iter().any(|s| s.id == story.id));
}

#[tokio::test]
async fn test_invalid_hours_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/stories?hours=soon").await.unwrap();
    let status = response.status();
    let body: ErrorResponse = response.json().await.unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error.code, "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_my_stories_lists_authored() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let story_req = CreateStoryRequest::unique();
    server
        .post_auth("/api/users/me/stories", &auth.token, &story_req)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/users/me/my-stories", &auth.token)
        .await
        .unwrap();
    let stories: Vec<StoryResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].posted_by, auth.user.id);
}

#[tokio::test]
async fn test_delete_all_stories() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    for _ in 0..2 {
        server
            .post_auth(
                "/api/users/me/stories",
                &auth.token,
                &CreateStoryRequest::unique(),
            )
            .await
            .unwrap();
    }

    let response = server
        .delete_auth("/api/users/me/stories", &auth.token)
        .await
        .unwrap();
    let deleted: DeletedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted.deleted, 2);

    let response = server
        .get_auth("/api/users/me/my-stories", &auth.token)
        .await
        .unwrap();
    let stories: Vec<StoryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(stories.is_empty());
}

// ============================================================================
// Group Tests
// ============================================================================

#[tokio::test]
async fn test_create_group() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let group_req = CreateGroupRequest::unique(Vec::new());
    let response = server
        .post_auth("/api/users/me/groups", &auth.token, &group_req)
        .await
        .unwrap();
    let group: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(group.name, group_req.name);
    assert_eq!(group.owner, auth.user.id);
    // The owner is always a member
    assert!(group.members.contains(&auth.user.id));
}

#[tokio::test]
async fn test_group_message_roundtrip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let group_req = CreateGroupRequest::unique(Vec::new());
    let response = server
        .post_auth("/api/users/me/groups", &auth.token, &group_req)
        .await
        .unwrap();
    let group: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Send
    let message_req = SendGroupMessageRequest::simple("Hello group");
    let response = server
        .post_auth(
            &format!("/api/groups/{}/users/me/messages", group.id),
            &auth.token,
            &message_req,
        )
        .await
        .unwrap();
    let message: GroupMessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(message.group_id, group.id);
    assert_eq!(message.sender, auth.user.id);

    // Listed under the group
    let response = server
        .get(&format!("/api/groups/{}/messages", group.id))
        .await
        .unwrap();
    let messages: Vec<GroupMessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(messages.len(), 1);

    // Fetch by id, then delete
    let response = server
        .get(&format!("/api/groups/{}/messages/{}", group.id, message.id))
        .await
        .unwrap();
    let fetched: GroupMessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.message, "Hello group");

    let response = server
        .delete(&format!("/api/groups/{}/messages/{}", group.id, message.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_non_member_cannot_post_to_group() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let owner_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &owner_req).await.unwrap();
    let owner: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let outsider_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &outsider_req).await.unwrap();
    let outsider: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let group_req = CreateGroupRequest::unique(Vec::new());
    let response = server
        .post_auth("/api/users/me/groups", &owner.token, &group_req)
        .await
        .unwrap();
    let group: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let message_req = SendGroupMessageRequest::simple("Let me in");
    let response = server
        .post_auth(
            &format!("/api/groups/{}/users/me/messages", group.id),
            &outsider.token,
            &message_req,
        )
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorResponse = response.json().await.unwrap();

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body.error.code, "NOT_GROUP_MEMBER");
}

#[tokio::test]
async fn test_group_message_under_wrong_group_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/users/me/groups",
            &auth.token,
            &CreateGroupRequest::unique(Vec::new()),
        )
        .await
        .unwrap();
    let first: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/users/me/groups",
            &auth.token,
            &CreateGroupRequest::unique(Vec::new()),
        )
        .await
        .unwrap();
    let second: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let message_req = SendGroupMessageRequest::simple("In the first group");
    let response = server
        .post_auth(
            &format!("/api/groups/{}/users/me/messages", first.id),
            &auth.token,
            &message_req,
        )
        .await
        .unwrap();
    let message: GroupMessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The same message id under the second group reads as missing
    let response = server
        .get(&format!(
            "/api/groups/{}/messages/{}",
            second.id, message.id
        ))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_group() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let response = server.post("/api/auth/signup", &signup_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let group_req = CreateGroupRequest::unique(Vec::new());
    let response = server
        .post_auth("/api/users/me/groups", &auth.token, &group_req)
        .await
        .unwrap();
    let group: GroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update_req = UpdateGroupRequest {
        name: Some("Renamed Group".to_string()),
        ..Default::default()
    };
    let response = server
        .put(&format!("/api/groups/{}", group.id), &update_req)
        .await
        .unwrap();
    let updated: GroupResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.name, "Renamed Group");
}
