//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guestbook_core::entities::{Message, MessageUpdate, NewMessage, RankedMessage};
use guestbook_core::traits::{MessageRepository, RepoResult};
use guestbook_core::value_objects::{MessageId, UserId};

use crate::models::{MessageModel, RankedMessageModel};

use super::error::{escape_like, map_db_error};

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MessageId) -> RepoResult<Option<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, author_id, body, private, created_at
            FROM messages
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Message::from))
    }

    #[instrument(skip(self))]
    async fn list_visible(&self, requester: UserId, limit: i64) -> RepoResult<Vec<Message>> {
        let results = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, author_id, body, private, created_at
            FROM messages
            WHERE private = FALSE OR author_id = $1
            ORDER BY id DESC
            LIMIT $2
            ",
        )
        .bind(requester.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self))]
    async fn search_visible(
        &self,
        requester: UserId,
        term: &str,
        limit: i64,
    ) -> RepoResult<Vec<Message>> {
        let pattern = format!("%{}%", escape_like(term));

        let results = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, author_id, body, private, created_at
            FROM messages
            WHERE (private = FALSE OR author_id = $1)
              AND body LIKE $2 ESCAPE '\'
            ORDER BY id DESC
            LIMIT $3
            ",
        )
        .bind(requester.into_inner())
        .bind(pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self))]
    async fn most_upvoted(&self, limit: i64) -> RepoResult<Vec<RankedMessage>> {
        let results = sqlx::query_as::<_, RankedMessageModel>(
            r"
            SELECT m.id, m.body, COUNT(u.id) AS upvotes
            FROM messages m
            JOIN upvotes u ON u.message_id = m.id
            WHERE m.private = FALSE
            GROUP BY m.id, m.body
            ORDER BY upvotes DESC, m.id ASC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(RankedMessage::from).collect())
    }

    #[instrument(skip(self, message), fields(author_id = %message.author_id))]
    async fn create(&self, message: &NewMessage) -> RepoResult<Message> {
        let result = sqlx::query_as::<_, MessageModel>(
            r"
            INSERT INTO messages (author_id, body, private)
            VALUES ($1, $2, $3)
            RETURNING id, author_id, body, private, created_at
            ",
        )
        .bind(message.author_id.into_inner())
        .bind(&message.body)
        .bind(message.private)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Message::from(result))
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: MessageId, update: &MessageUpdate) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE messages
            SET body = $2, private = $3
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(&update.body)
        .bind(update.private)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MessageId) -> RepoResult<u64> {
        // upvotes go with it through ON DELETE CASCADE
        let result = sqlx::query(
            r"
            DELETE FROM messages WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
