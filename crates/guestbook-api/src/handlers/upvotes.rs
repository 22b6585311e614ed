//! Upvote handlers

use axum::{extract::State, Json};
use guestbook_service::{StatusResponse, UpvoteService};

use crate::extractors::{AuthUser, MessageIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Upvote a message
///
/// POST /messages/{id}/upvote
pub async fn upvote_message(
    State(state): State<AppState>,
    auth: AuthUser,
    MessageIdPath(message_id): MessageIdPath,
) -> ApiResult<Json<StatusResponse>> {
    let service = UpvoteService::new(state.service_context());
    let status = service.upvote(auth.user_id, message_id).await?;
    Ok(Json(status))
}
