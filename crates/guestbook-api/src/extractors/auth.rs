//! Authentication extractor
//!
//! Resolves HTTP Basic credentials to an active account on every request.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Basic, Authorization},
    TypedHeader,
};
use guestbook_common::AppError;
use guestbook_core::UserId;
use guestbook_service::{AccountService, ServiceError};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from Basic credentials
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

impl AuthUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(basic)) =
            TypedHeader::<Authorization<Basic>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let user_id = AccountService::new(app_state.service_context())
            .authenticate(basic.username(), basic.password())
            .await
            .map_err(|e| match e {
                ServiceError::App(AppError::InvalidCredentials) => ApiError::InvalidCredentials,
                other => ApiError::Service(other),
            })?;

        Ok(AuthUser::new(user_id))
    }
}
