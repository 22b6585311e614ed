//! Message handlers
//!
//! Endpoints for message operations.

use axum::{extract::State, Json};
use guestbook_service::{
    CreateMessageRequest, MessageCreatedResponse, MessageResponse, MessageSearchResponse,
    MessageService, RankedMessageResponse, StatusResponse, UpdateMessageRequest,
};

use crate::extractors::{
    ApiQuery, AuthUser, MessageIdPath, PageSize, SearchParams, ValidatedJson,
};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List messages visible to the caller
///
/// GET /messages?num=
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    PageSize(num): PageSize,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let messages = service.list_messages(auth.user_id, num).await?;
    Ok(Json(messages))
}

/// Create message
///
/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<Json<MessageCreatedResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.create_message(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get a single message
///
/// GET /messages/{id}
pub async fn get_message(
    State(state): State<AppState>,
    auth: AuthUser,
    MessageIdPath(message_id): MessageIdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = MessageService::new(state.service_context());
    let message = service.get_message(auth.user_id, message_id).await?;
    Ok(Json(message))
}

/// Substring search over visible messages
///
/// GET /messages/search?search_term=&num=
pub async fn search_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> ApiResult<Json<Vec<MessageSearchResponse>>> {
    let service = MessageService::new(state.service_context());
    let hits = service
        .search_messages(auth.user_id, &params.search_term, params.num)
        .await?;
    Ok(Json(hits))
}

/// Public messages ranked by upvotes
///
/// GET /messages/most_upvoted?num=
pub async fn most_upvoted(
    State(state): State<AppState>,
    PageSize(num): PageSize,
) -> ApiResult<Json<Vec<RankedMessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let ranked = service.most_upvoted(num).await?;
    Ok(Json(ranked))
}

/// Update message
///
/// PATCH /messages/{id}
pub async fn update_message(
    State(state): State<AppState>,
    auth: AuthUser,
    MessageIdPath(message_id): MessageIdPath,
    ValidatedJson(request): ValidatedJson<UpdateMessageRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let service = MessageService::new(state.service_context());
    let status = service
        .update_message(auth.user_id, message_id, request)
        .await?;
    Ok(Json(status))
}

/// Delete message
///
/// DELETE /messages/{id}
pub async fn delete_message(
    State(state): State<AppState>,
    auth: AuthUser,
    MessageIdPath(message_id): MessageIdPath,
) -> ApiResult<Json<StatusResponse>> {
    let service = MessageService::new(state.service_context());
    let status = service.delete_message(auth.user_id, message_id).await?;
    Ok(Json(status))
}
