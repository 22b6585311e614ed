//! PostgreSQL implementation of ActivationTokenRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use guestbook_core::entities::ActivationToken;
use guestbook_core::error::DomainError;
use guestbook_core::traits::{ActivationTokenRepository, RepoResult};

use crate::models::ActivationTokenModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ActivationTokenRepository
#[derive(Clone)]
pub struct PgActivationTokenRepository {
    pool: PgPool,
}

impl PgActivationTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivationTokenRepository for PgActivationTokenRepository {
    #[instrument(skip(self))]
    async fn find(&self, token: Uuid) -> RepoResult<Option<ActivationToken>> {
        let result = sqlx::query_as::<_, ActivationTokenModel>(
            r"
            SELECT token, user_id, created_at, redeemed_at
            FROM activation_tokens
            WHERE token = $1
            ",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ActivationToken::from))
    }

    #[instrument(skip(self))]
    async fn redeem(&self, token: Uuid) -> RepoResult<()> {
        // Both updates are guarded, so a concurrent redemption loses on one of
        // them and the transaction is rolled back when `tx` drops.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let user_id = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE activation_tokens
            SET redeemed_at = NOW()
            WHERE token = $1 AND redeemed_at IS NULL
            RETURNING user_id
            ",
        )
        .bind(token)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::AccountAlreadyActive)?;

        let activated = sqlx::query(
            r"
            UPDATE users
            SET active = TRUE, activated_at = NOW()
            WHERE id = $1 AND active = FALSE
            ",
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if activated.rows_affected() == 0 {
            return Err(DomainError::AccountAlreadyActive);
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
