//! PostgreSQL implementation of UpvoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guestbook_core::entities::{NewUpvote, Upvote};
use guestbook_core::error::DomainError;
use guestbook_core::traits::{RepoResult, UpvoteRepository};

use crate::models::UpvoteModel;

use super::error::map_unique_violation;

/// PostgreSQL implementation of UpvoteRepository
///
/// Duplicate detection relies on the `(user_id, message_id)` unique
/// constraint, so two concurrent upvotes from one user cannot both land.
#[derive(Clone)]
pub struct PgUpvoteRepository {
    pool: PgPool,
}

impl PgUpvoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UpvoteRepository for PgUpvoteRepository {
    #[instrument(skip(self))]
    async fn create(&self, upvote: &NewUpvote) -> RepoResult<Upvote> {
        let result = sqlx::query_as::<_, UpvoteModel>(
            r"
            INSERT INTO upvotes (user_id, message_id)
            VALUES ($1, $2)
            RETURNING id, user_id, message_id, created_at
            ",
        )
        .bind(upvote.user_id.into_inner())
        .bind(upvote.message_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // the message may have been deleted since the caller read it
            if e
                .as_database_error()
                .is_some_and(|db_err| db_err.is_foreign_key_violation())
            {
                return DomainError::MessageNotFound(upvote.message_id);
            }
            map_unique_violation(e, || DomainError::AlreadyUpvoted)
        })?;

        Ok(Upvote::from(result))
    }
}
