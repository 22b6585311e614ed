//! Message entity - a guestbook entry left by a registered user

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{MessageId, UserId};

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub author_id: UserId,
    pub body: String,
    pub private: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Maximum body length in characters
    pub const MAX_BODY_LEN: usize = 2000;

    /// Check a body before it is stored
    pub fn validate_body(body: &str) -> Result<(), DomainError> {
        let len = body.chars().count();
        if body.trim().is_empty() || len > Self::MAX_BODY_LEN {
            return Err(DomainError::InvalidMessageLength {
                max: Self::MAX_BODY_LEN,
            });
        }
        Ok(())
    }

    /// Check if the given user wrote this message
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Check if the message is publicly readable
    #[inline]
    pub fn is_public(&self) -> bool {
        !self.private
    }

    /// Apply an author's edit
    ///
    /// `author_id` and `created_at` never change.
    pub fn apply(&mut self, update: MessageUpdate) {
        self.body = update.body;
        self.private = update.private;
    }
}

/// Values for a message that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub author_id: UserId,
    pub body: String,
    pub private: bool,
}

impl NewMessage {
    pub fn new(author_id: UserId, body: impl Into<String>, private: bool) -> Self {
        Self {
            author_id,
            body: body.into(),
            private,
        }
    }
}

/// Replacement body and privacy flag for an existing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageUpdate {
    pub body: String,
    pub private: bool,
}

/// A public message with its upvote tally (ranking read model)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedMessage {
    pub id: MessageId,
    pub body: String,
    pub upvotes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(private: bool) -> Message {
        Message {
            id: MessageId::new(1),
            author_id: UserId::new(10),
            body: "Hello, guestbook!".to_string(),
            private,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_owned_by() {
        let msg = message(false);
        assert!(msg.is_owned_by(UserId::new(10)));
        assert!(!msg.is_owned_by(UserId::new(11)));
    }

    #[test]
    fn test_validate_body() {
        assert!(Message::validate_body("hello").is_ok());
        assert!(Message::validate_body("   ").is_err());
        assert!(Message::validate_body("").is_err());
        assert!(Message::validate_body(&"x".repeat(Message::MAX_BODY_LEN)).is_ok());
        assert!(Message::validate_body(&"x".repeat(Message::MAX_BODY_LEN + 1)).is_err());
    }

    #[test]
    fn test_apply_update_keeps_author() {
        let mut msg = message(false);
        let created_at = msg.created_at;

        msg.apply(MessageUpdate {
            body: "Edited".to_string(),
            private: true,
        });

        assert_eq!(msg.body, "Edited");
        assert!(!msg.is_public());
        assert_eq!(msg.author_id, UserId::new(10));
        assert_eq!(msg.created_at, created_at);
    }
}
