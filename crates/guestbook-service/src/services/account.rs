//! Account service
//!
//! Registration, activation and credential checks for Basic auth.

use guestbook_common::auth::{hash_password, validate_password, verify_password};
use guestbook_common::AppError;
use guestbook_core::entities::NewUser;
use guestbook_core::{policy, DomainError, UserId};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{RegisterRequest, RegisterResponse, StatusResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register an inactive account and issue its activation token
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        if request.validate().is_err() {
            return Err(DomainError::InvalidEmail.into());
        }
        validate_password(&request.password).map_err(|e| match e {
            AppError::Validation(msg) => ServiceError::from(DomainError::WeakPassword(msg)),
            other => ServiceError::from(other),
        })?;

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let new_user = NewUser::new(request.email, password_hash);
        let user = self.ctx.user_repo().create(&new_user).await?;

        // Delivery is out of band; the operator relays the token.
        info!(
            user_id = %user.id,
            activation_token = %new_user.activation_token,
            "User registered, awaiting activation"
        );

        Ok(RegisterResponse::created(user.id))
    }

    /// Redeem an activation token
    #[instrument(skip(self))]
    pub async fn activate(&self, token: &str) -> ServiceResult<StatusResponse> {
        let token = Uuid::parse_str(token.trim())
            .map_err(|_| ServiceError::validation("Malformed activation token"))?;

        let record = self
            .ctx
            .token_repo()
            .find(token)
            .await?
            .ok_or(DomainError::InvalidActivationToken)?;
        let user = self
            .ctx
            .user_repo()
            .find_by_id(record.user_id)
            .await?
            .ok_or(DomainError::InvalidActivationToken)?;

        policy::authorize_activation(&record, &user)?;
        self.ctx.token_repo().redeem(token).await?;

        info!(user_id = %user.id, "Account activated");

        Ok(StatusResponse::new("Your account has been activated!"))
    }

    /// Resolve Basic credentials to an active user
    ///
    /// Every failure is the same `InvalidCredentials`; the reason only goes
    /// to the log.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> ServiceResult<UserId> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!("Authentication failed: unknown email");
                AppError::InvalidCredentials
            })?;

        if !user.can_authenticate() {
            warn!(user_id = %user.id, "Authentication failed: account not activated");
            return Err(AppError::InvalidCredentials.into());
        }

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Authentication failed: no password hash");
                AppError::InvalidCredentials
            })?;

        let is_valid = verify_password(password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Authentication failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        Ok(user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryStore;

    fn request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_activate_authenticate() {
        let store = InMemoryStore::new();
        let ctx = store.context();
        let service = AccountService::new(&ctx);

        let response = service
            .register(request("guest@example.com", "correct horse"))
            .await
            .unwrap();
        assert_eq!(response.message, "User created");

        // inactive accounts cannot sign in
        let result = service.authenticate("guest@example.com", "correct horse").await;
        assert!(matches!(result, Err(ServiceError::App(AppError::InvalidCredentials))));

        let token = store.token_for("guest@example.com").unwrap();
        let status = service.activate(&token.to_string()).await.unwrap();
        assert_eq!(status.status, "Your account has been activated!");
        assert!(store.user(response.user_id).unwrap().active);

        let user_id = service
            .authenticate("guest@example.com", "correct horse")
            .await
            .unwrap();
        assert_eq!(user_id, response.user_id);
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input() {
        let store = InMemoryStore::new();
        let ctx = store.context();
        let service = AccountService::new(&ctx);

        let result = service.register(request("nope", "correct horse")).await;
        assert!(matches!(result, Err(ServiceError::Domain(DomainError::InvalidEmail))));

        let result = service.register(request("guest@example.com", "short")).await;
        assert!(matches!(result, Err(ServiceError::Domain(DomainError::WeakPassword(_)))));
        assert_eq!(result.unwrap_err().status_code(), 400);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let store = InMemoryStore::new();
        let ctx = store.context();
        let service = AccountService::new(&ctx);

        service
            .register(request("guest@example.com", "correct horse"))
            .await
            .unwrap();
        let result = service
            .register(request("guest@example.com", "another one"))
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::Domain(DomainError::EmailAlreadyExists))
        ));
    }

    #[tokio::test]
    async fn test_activation_token_is_single_use() {
        let store = InMemoryStore::new();
        let ctx = store.context();
        let service = AccountService::new(&ctx);

        service
            .register(request("guest@example.com", "correct horse"))
            .await
            .unwrap();
        let token = store.token_for("guest@example.com").unwrap().to_string();

        service.activate(&token).await.unwrap();
        let result = service.activate(&token).await;
        assert!(matches!(
            result,
            Err(ServiceError::Domain(DomainError::AccountAlreadyActive))
        ));
    }

    #[tokio::test]
    async fn test_activation_token_errors() {
        let store = InMemoryStore::new();
        let ctx = store.context();
        let service = AccountService::new(&ctx);

        let result = service.activate(&Uuid::new_v4().to_string()).await;
        assert!(matches!(
            result,
            Err(ServiceError::Domain(DomainError::InvalidActivationToken))
        ));

        let result = service.activate("not-a-uuid").await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_authenticate_failures_look_alike() {
        let store = InMemoryStore::new();
        let ctx = store.context();
        let service = AccountService::new(&ctx);
        store.insert_active_user("alice@example.com", "password1");

        for (email, password) in [
            ("alice@example.com", "wrong password"),
            ("nobody@example.com", "password1"),
        ] {
            let result = service.authenticate(email, password).await;
            assert!(matches!(result, Err(ServiceError::App(AppError::InvalidCredentials))));
        }
    }
}
