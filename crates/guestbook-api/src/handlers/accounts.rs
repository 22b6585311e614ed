//! Account handlers
//!
//! Registration and activation need no credentials.

use axum::{extract::State, Json};
use guestbook_service::{AccountService, RegisterRequest, RegisterResponse, StatusResponse};

use crate::extractors::{ActivateParams, ApiQuery, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new, inactive account
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> ApiResult<Created<Json<RegisterResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Redeem an activation token
///
/// POST /activate?token=
pub async fn activate(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ActivateParams>,
) -> ApiResult<Json<StatusResponse>> {
    let service = AccountService::new(state.service_context());
    let status = service.activate(&params.token).await?;
    Ok(Json(status))
}
