//! Entity to DTO mappers

use guestbook_core::entities::{Message, RankedMessage};

use super::responses::{MessageResponse, MessageSearchResponse, RankedMessageResponse};

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            message: message.body,
            created_at: message.created_at,
        }
    }
}

impl From<Message> for MessageSearchResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            message: message.body,
            private: message.private,
        }
    }
}

impl From<RankedMessage> for RankedMessageResponse {
    fn from(ranked: RankedMessage) -> Self {
        Self {
            id: ranked.id,
            message: ranked.body,
            upvotes: ranked.upvotes,
        }
    }
}
