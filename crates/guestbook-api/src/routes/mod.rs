//! Route definitions
//!
//! Everything is mounted at the root; only `/health` bypasses rate limiting.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{accounts, health, messages, upvotes};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(account_routes())
        .merge(message_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Registration and activation
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(accounts::register))
        .route("/activate", post(accounts::activate))
}

/// Message routes
///
/// The static `search` and `most_upvoted` segments win over `:id`.
fn message_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/messages",
            get(messages::list_messages).post(messages::create_message),
        )
        .route("/messages/search", get(messages::search_messages))
        .route("/messages/most_upvoted", get(messages::most_upvoted))
        .route(
            "/messages/:id",
            get(messages::get_message)
                .patch(messages::update_message)
                .delete(messages::delete_message),
        )
        .route("/messages/:id/upvote", post(upvotes::upvote_message))
}
