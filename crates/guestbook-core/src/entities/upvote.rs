//! Upvote entity - one user's endorsement of one message

use chrono::{DateTime, Utc};

use crate::value_objects::{MessageId, UpvoteId, UserId};

/// Upvote entity
///
/// At most one exists per (user_id, message_id). Never mutated or deleted
/// except by cascade when its message is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upvote {
    pub id: UpvoteId,
    pub user_id: UserId,
    pub message_id: MessageId,
    pub created_at: DateTime<Utc>,
}

/// Values for an upvote that has not been stored yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewUpvote {
    pub user_id: UserId,
    pub message_id: MessageId,
}

impl NewUpvote {
    pub fn new(user_id: UserId, message_id: MessageId) -> Self {
        Self {
            user_id,
            message_id,
        }
    }
}
