//! API Integration Tests
//!
//! Each test spawns a server on an ephemeral port backed by an in-memory
//! store, so no external services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use chrono::{Duration, Utc};
use integration_tests::{
    assert_json, assert_status, issue_token, CleanupReply, ErrorReply, MemoryStore,
    ReactionReply, ReactionRequest, TestServer, TEST_SERVICE_TOKEN,
};
use reqwest::StatusCode;
use serde_json::json;
use social_core::{PostId, UserId};

const REACTION_PATH: &str = "/functions/handle-reaction";
const CLEANUP_PATH: &str = "/functions/cleanup-expired-posts";

async fn react(server: &TestServer, token: &str, body: &ReactionRequest) -> ReactionReply {
    let response = server.post_auth(REACTION_PATH, token, body).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    server.store.set_healthy(false);
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body["status"], "not_ready");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_adds_then_removes() {
    let server = TestServer::start().await.unwrap();
    let post_id = server.store.insert_post(None);
    let token = issue_token(UserId::generate());

    let added = react(&server, &token, &ReactionRequest::toggle(post_id, "heart")).await;
    assert!(added.success);
    assert_eq!(added.action, "added");
    assert_eq!(added.reaction_type, "heart");
    assert_eq!(added.previous, None);
    assert_eq!(added.current.as_deref(), Some("heart"));
    assert_eq!(added.counts.heart_count, 1);

    let removed = react(&server, &token, &ReactionRequest::toggle(post_id, "heart")).await;
    assert_eq!(removed.action, "removed");
    assert_eq!(removed.previous.as_deref(), Some("heart"));
    assert_eq!(removed.current, None);
    assert_eq!(removed.counts.heart_count, 0);
    assert_eq!(server.store.reaction_count(post_id), 0);
}

#[tokio::test]
async fn test_switching_kind_moves_the_count() {
    let server = TestServer::start().await.unwrap();
    let post_id = server.store.insert_post(None);
    let token = issue_token(UserId::generate());

    react(&server, &token, &ReactionRequest::toggle(post_id, "laugh")).await;
    let changed = react(&server, &token, &ReactionRequest::toggle(post_id, "broken_heart")).await;

    assert_eq!(changed.action, "changed");
    assert_eq!(changed.old_reaction.as_deref(), Some("laugh"));
    assert_eq!(changed.new_reaction.as_deref(), Some("broken_heart"));
    assert_eq!(changed.counts.laugh_count, 0);
    assert_eq!(changed.counts.broken_heart_count, 1);
    assert_eq!(server.store.reaction_count(post_id), 1);
}

#[tokio::test]
async fn test_set_mode_reports_no_change() {
    let server = TestServer::start().await.unwrap();
    let post_id = server.store.insert_post(None);
    let token = issue_token(UserId::generate());

    react(&server, &token, &ReactionRequest::set(post_id, "hot")).await;
    let again = react(&server, &token, &ReactionRequest::set(post_id, "hot")).await;

    assert_eq!(again.action, "no_change");
    assert_eq!(again.current.as_deref(), Some("hot"));
    assert_eq!(again.old_reaction, None);
    assert_eq!(again.counts.hot_count, 1);
}

#[tokio::test]
async fn test_users_are_counted_independently() {
    let server = TestServer::start().await.unwrap();
    let post_id = server.store.insert_post(None);

    let first = issue_token(UserId::generate());
    let second = issue_token(UserId::generate());

    react(&server, &first, &ReactionRequest::toggle(post_id, "heart")).await;
    let reply = react(&server, &second, &ReactionRequest::toggle(post_id, "heart")).await;
    assert_eq!(reply.counts.heart_count, 2);

    let reply = react(&server, &first, &ReactionRequest::toggle(post_id, "heart")).await;
    assert_eq!(reply.counts.heart_count, 1);
}

#[tokio::test]
async fn test_legacy_row_is_read_as_its_kind() {
    let store = Arc::new(MemoryStore::new());
    let post_id = store.insert_post(None);
    let user_id = UserId::generate();
    store.insert_raw_reaction(post_id, user_id, "\u{1f975}");

    let server = TestServer::start_with_store(store, Some(TEST_SERVICE_TOKEN))
        .await
        .unwrap();
    let token = issue_token(user_id);

    let reply = react(&server, &token, &ReactionRequest::toggle(post_id, "hot")).await;
    assert_eq!(reply.action, "removed");
    assert_eq!(reply.previous.as_deref(), Some("hot"));
    assert_eq!(reply.counts.hot_count, 0);
}

#[tokio::test]
async fn test_unknown_post_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let token = issue_token(UserId::generate());

    let response = server
        .post_auth(REACTION_PATH, &token, &ReactionRequest::toggle(PostId::generate(), "heart"))
        .await
        .unwrap();
    let body: ErrorReply = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(!body.success);
    assert_eq!(body.code, "UNKNOWN_POST");
}

#[tokio::test]
async fn test_corrupt_row_is_a_server_error() {
    let store = Arc::new(MemoryStore::new());
    let post_id = store.insert_post(None);
    let user_id = UserId::generate();
    store.insert_raw_reaction(post_id, user_id, "\u{1f622}");

    let server = TestServer::start_with_store(store, None).await.unwrap();
    let response = server
        .post_auth(REACTION_PATH, &issue_token(user_id), &ReactionRequest::toggle(post_id, "heart"))
        .await
        .unwrap();

    let body: ErrorReply = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error, "Internal server error");
    assert!(body.details.as_str().is_some_and(|d| d.contains('\u{1f622}')));
}

// ============================================================================
// Validation and Auth Ordering
// ============================================================================

#[tokio::test]
async fn test_invalid_kind_is_rejected_before_auth() {
    let server = TestServer::start().await.unwrap();
    let post_id = server.store.insert_post(None);
    let body = ReactionRequest::toggle(post_id, "sad");

    // Without credentials the body is still judged first
    let response = server.post(REACTION_PATH, &body).await.unwrap();
    let reply: ErrorReply = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(reply.code, "INVALID_REACTION_TYPE");

    let token = issue_token(UserId::generate());
    let response = server.post_auth(REACTION_PATH, &token, &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(server.store.reaction_count(post_id), 0);
}

#[tokio::test]
async fn test_missing_fields() {
    let server = TestServer::start().await.unwrap();
    let token = issue_token(UserId::generate());

    let body = json!({ "postId": PostId::generate().to_string() });
    let response = server.post_auth(REACTION_PATH, &token, &body).await.unwrap();
    let reply: ErrorReply = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(reply.code, "VALIDATION_ERROR");
    assert_eq!(reply.error, "Missing postId or reactionType");

    let body = json!({ "postId": "", "reactionType": "heart" });
    let response = server.post(REACTION_PATH, &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_malformed_body() {
    let server = TestServer::start().await.unwrap();
    let token = issue_token(UserId::generate());

    let response = server.post_raw(REACTION_PATH, &token, "{not json").await.unwrap();
    let reply: ErrorReply = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(reply.code, "INVALID_BODY");
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let server = TestServer::start().await.unwrap();
    let post_id = server.store.insert_post(None);

    let response = server
        .post(REACTION_PATH, &ReactionRequest::toggle(post_id, "heart"))
        .await
        .unwrap();
    let reply: ErrorReply = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(reply.code, "MISSING_AUTH");
    assert_eq!(server.store.reaction_count(post_id), 0);
}

#[tokio::test]
async fn test_forged_token_is_unauthorized() {
    let server = TestServer::start().await.unwrap();
    let post_id = server.store.insert_post(None);

    let forged = social_common::JwtService::new("some-other-secret-entirely")
        .issue_access_token(UserId::generate())
        .unwrap();
    let response = server
        .post_auth(REACTION_PATH, &forged, &ReactionRequest::toggle(post_id, "heart"))
        .await
        .unwrap();
    let reply: ErrorReply = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(reply.code, "INVALID_TOKEN");
    assert_eq!(server.store.counts(post_id).unwrap().heart, 0);
}

// ============================================================================
// Preflight Tests
// ============================================================================

#[tokio::test]
async fn test_bare_options_is_no_content() {
    let server = TestServer::start().await.unwrap();
    for path in [REACTION_PATH, CLEANUP_PATH] {
        let response = server.options(path).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .client
        .request(reqwest::Method::OPTIONS, format!("{}{REACTION_PATH}", server.base_url()))
        .header("Origin", "https://app.example.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "authorization,content-type")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default()
    };
    assert_eq!(header("access-control-allow-origin"), "*");
    assert!(header("access-control-allow-methods").contains("post"));
    assert!(header("access-control-allow-headers").contains("authorization"));
    assert!(header("access-control-allow-headers").contains("content-type"));
}

// ============================================================================
// Cleanup Tests
// ============================================================================

#[tokio::test]
async fn test_cleanup_deletes_expired_posts() {
    let server = TestServer::start().await.unwrap();
    let store = &server.store;
    let now = Utc::now();

    let expired = store.insert_post(Some(now - Duration::hours(1)));
    let live = store.insert_post(Some(now + Duration::hours(1)));
    let forever = store.insert_post(None);
    store.insert_raw_reaction(expired, UserId::generate(), "heart");
    store.insert_raw_reaction(expired, UserId::generate(), "laugh");
    store.insert_raw_reaction(live, UserId::generate(), "hot");

    let response = server
        .post_empty(CLEANUP_PATH, Some(TEST_SERVICE_TOKEN))
        .await
        .unwrap();
    let reply: CleanupReply = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(reply.success);
    assert_eq!(reply.message, "Expired posts cleaned up successfully");
    assert_eq!(reply.posts_deleted, 1);
    assert_eq!(reply.reactions_deleted, 2);
    assert!(!store.has_post(expired));
    assert!(store.has_post(live));
    assert!(store.has_post(forever));
    assert_eq!(store.reaction_count(live), 1);

    // A second sweep finds nothing
    let response = server
        .post_empty(CLEANUP_PATH, Some(TEST_SERVICE_TOKEN))
        .await
        .unwrap();
    let reply: CleanupReply = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reply.posts_deleted, 0);
    assert_eq!(reply.reactions_deleted, 0);
}

#[tokio::test]
async fn test_cleanup_requires_service_token() {
    let server = TestServer::start().await.unwrap();
    let expired = server.store.insert_post(Some(Utc::now() - Duration::minutes(5)));

    let response = server.post_empty(CLEANUP_PATH, None).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let user_token = issue_token(UserId::generate());
    let response = server.post_empty(CLEANUP_PATH, Some(&user_token)).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert!(server.store.has_post(expired));
}

#[tokio::test]
async fn test_cleanup_without_configured_token_is_open() {
    let store = Arc::new(MemoryStore::new());
    let expired = store.insert_post(Some(Utc::now() - Duration::minutes(5)));

    let server = TestServer::start_with_store(store, None).await.unwrap();
    let response = server.post_empty(CLEANUP_PATH, None).await.unwrap();
    let reply: CleanupReply = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(reply.posts_deleted, 1);
    assert!(!server.store.has_post(expired));
}
