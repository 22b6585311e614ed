//! Upvote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for upvotes table
#[derive(Debug, Clone, FromRow)]
pub struct UpvoteModel {
    pub id: i64,
    pub user_id: i64,
    pub message_id: i64,
    pub created_at: DateTime<Utc>,
}
