//! Service context - dependency container for services
//!
//! Holds the repositories, the database pool (when there is one) and the
//! page-size limits. Cloning is cheap; everything sits behind an `Arc`.

use std::sync::Arc;

use guestbook_common::PaginationConfig;
use guestbook_core::traits::{
    ActivationTokenRepository, MessageRepository, UpvoteRepository, UserRepository,
};
use guestbook_db::{
    PgActivationTokenRepository, PgMessageRepository, PgPool, PgUpvoteRepository,
    PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Absent when repositories are not backed by PostgreSQL
    pool: Option<PgPool>,

    user_repo: Arc<dyn UserRepository>,
    token_repo: Arc<dyn ActivationTokenRepository>,
    message_repo: Arc<dyn MessageRepository>,
    upvote_repo: Arc<dyn UpvoteRepository>,

    pagination: PaginationConfig,
}

impl ServiceContext {
    /// Wire every repository to one PostgreSQL pool
    pub fn postgres(pool: PgPool, pagination: PaginationConfig) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            token_repo: Arc::new(PgActivationTokenRepository::new(pool.clone())),
            message_repo: Arc::new(PgMessageRepository::new(pool.clone())),
            upvote_repo: Arc::new(PgUpvoteRepository::new(pool.clone())),
            pool: Some(pool),
            pagination,
        }
    }

    /// Get the PostgreSQL connection pool, if any
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Check that the database answers
    ///
    /// Always `false` without a pool.
    pub async fn database_healthy(&self) -> bool {
        match &self.pool {
            Some(pool) => sqlx::query("SELECT 1").execute(pool).await.is_ok(),
            None => false,
        }
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn token_repo(&self) -> &dyn ActivationTokenRepository {
        self.token_repo.as_ref()
    }

    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    pub fn upvote_repo(&self) -> &dyn UpvoteRepository {
        self.upvote_repo.as_ref()
    }

    /// Page size limits for list endpoints
    pub fn pagination(&self) -> &PaginationConfig {
        &self.pagination
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("pagination", &self.pagination)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    token_repo: Option<Arc<dyn ActivationTokenRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    upvote_repo: Option<Arc<dyn UpvoteRepository>>,
    pagination: Option<PaginationConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn token_repo(mut self, repo: Arc<dyn ActivationTokenRepository>) -> Self {
        self.token_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn upvote_repo(mut self, repo: Arc<dyn UpvoteRepository>) -> Self {
        self.upvote_repo = Some(repo);
        self
    }

    pub fn pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            token_repo: self
                .token_repo
                .ok_or_else(|| ServiceError::validation("token_repo is required"))?,
            message_repo: self
                .message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            upvote_repo: self
                .upvote_repo
                .ok_or_else(|| ServiceError::validation("upvote_repo is required"))?,
            pagination: self.pagination.unwrap_or_default(),
        })
    }
}
