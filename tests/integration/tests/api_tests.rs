//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
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
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_activate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();

    let response = server.post("/register", &creds).await.unwrap();
    let registered: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(registered.message, "User created");

    // not active yet
    let response = server.get_auth("/messages", &creds).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let token = server.activation_token(&creds.email).await.unwrap();
    let path = format!("/activate?token={token}");

    let response = server.post_empty(&path).await.unwrap();
    let status: Status = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.status, "Your account has been activated!");

    let response = server.get_auth("/messages", &creds).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // tokens are single-use
    let response = server.post_empty(&path).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "ACCOUNT_ALREADY_ACTIVE");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();

    let response = server.post("/register", &creds).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/register", &creds).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials {
        password: "short".to_string(),
        ..Credentials::unique()
    };

    let response = server.post("/register", &creds).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_unknown_activation_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let path = format!("/activate?token={}", uuid::Uuid::new_v4());

    let response = server.post_empty(&path).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = server.active_user().await.unwrap();
    let wrong = Credentials {
        password: "not the password".to_string(),
        ..creds
    };

    let response = server.get_auth("/messages", &wrong).await.unwrap();
    assert!(response.headers().contains_key("www-authenticate"));
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_private_message_visibility() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.active_user().await.unwrap();
    let bob = server.active_user().await.unwrap();
    let marker = unique_suffix();

    let body = MessageRequest::private(format!("secret {marker}"));
    let response = server.post_auth("/messages", &alice, Some(&body)).await.unwrap();
    let created: MessageCreated = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/messages/{}", created.message_id);

    let response = server.get_auth(&path, &alice).await.unwrap();
    let message: MessageView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, format!("secret {marker}"));

    let response = server.get_auth(&path, &bob).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let search = format!("/messages/search?search_term={marker}");
    let response = server.get_auth(&search, &bob).await.unwrap();
    let hits: Vec<SearchHit> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(hits.is_empty());

    let response = server.get_auth(&search, &alice).await.unwrap();
    let hits: Vec<SearchHit> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].private);

    let response = server.get_auth("/messages?num=100", &bob).await.unwrap();
    let listed: Vec<MessageView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().all(|m| m.id != created.message_id));
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.active_user().await.unwrap();
    let marker = unique_suffix();

    let body = MessageRequest::public(format!("{marker} plain text"));
    server.post_auth("/messages", &alice, Some(&body)).await.unwrap();

    let search = format!("/messages/search?search_term={marker}%25");
    let response = server.get_auth(&search, &alice).await.unwrap();
    let hits: Vec<SearchHit> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_update_and_delete_own_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.active_user().await.unwrap();
    let bob = server.active_user().await.unwrap();

    let body = MessageRequest::public("first draft");
    let response = server.post_auth("/messages", &alice, Some(&body)).await.unwrap();
    let created: MessageCreated = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/messages/{}", created.message_id);

    // someone else's message looks missing
    let edit = MessageRequest::public("hijacked");
    let response = server.patch_auth(&path, &bob, &edit).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    let response = server.delete_auth(&path, &bob).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let edit = MessageRequest::public("second draft");
    let response = server.patch_auth(&path, &alice, &edit).await.unwrap();
    let status: Status = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.status, "Message updated");

    let response = server.get_auth(&path, &bob).await.unwrap();
    let message: MessageView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, "second draft");

    let response = server.delete_auth(&path, &alice).await.unwrap();
    let status: Status = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.status, "Message deleted");

    let response = server.get_auth(&path, &alice).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_message_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = MessageRequest::public("anonymous");

    let response = server.post("/messages", &body).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Upvote Tests
// ============================================================================

#[tokio::test]
async fn test_upvote_rules() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.active_user().await.unwrap();
    let bob = server.active_user().await.unwrap();

    let body = MessageRequest::public("upvote me");
    let response = server.post_auth("/messages", &alice, Some(&body)).await.unwrap();
    let created: MessageCreated = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/messages/{}/upvote", created.message_id);
    let none: Option<&()> = None;

    let response = server.post_auth(&path, &alice, none).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "SELF_UPVOTE");

    let response = server.post_auth(&path, &bob, none).await.unwrap();
    let status: Status = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        status.status,
        format!(
            "Successfully upvoted message with id {}. Thank you!",
            created.message_id
        )
    );

    let response = server.post_auth(&path, &bob, none).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "ALREADY_UPVOTED");

    let response = server.post_auth("/messages/999999999/upvote", &bob, none).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_upvote_foreign_private_message_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.active_user().await.unwrap();
    let bob = server.active_user().await.unwrap();

    let body = MessageRequest::private("hidden");
    let response = server.post_auth("/messages", &alice, Some(&body)).await.unwrap();
    let created: MessageCreated = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/messages/{}/upvote", created.message_id);
    let response = server.post_auth(&path, &bob, None::<&()>).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_most_upvoted_is_public_and_ordered() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.active_user().await.unwrap();
    let bob = server.active_user().await.unwrap();

    let body = MessageRequest::public("popular");
    let response = server.post_auth("/messages", &alice, Some(&body)).await.unwrap();
    let created: MessageCreated = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/messages/{}/upvote", created.message_id);
    server.post_auth(&path, &bob, None::<&()>).await.unwrap();

    let response = server.get("/messages/most_upvoted?num=100").await.unwrap();
    let ranked: Vec<RankedView> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!ranked.is_empty());
    assert!(ranked.iter().all(|r| r.upvotes > 0));
    assert!(ranked.windows(2).all(|w| w[0].upvotes >= w[1].upvotes));
}
