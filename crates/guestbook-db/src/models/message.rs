//! Message database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub author_id: i64,
    pub body: String,
    pub private: bool,
    pub created_at: DateTime<Utc>,
}

/// A message joined with its upvote tally
#[derive(Debug, Clone, FromRow)]
pub struct RankedMessageModel {
    pub id: i64,
    pub body: String,
    pub upvotes: i64,
}
