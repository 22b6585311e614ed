//! Message and upvote model -> entity mappers

use guestbook_core::entities::{Message, RankedMessage, Upvote};
use guestbook_core::value_objects::{MessageId, UpvoteId, UserId};

use crate::models::{MessageModel, RankedMessageModel, UpvoteModel};

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: MessageId::new(model.id),
            author_id: UserId::new(model.author_id),
            body: model.body,
            private: model.private,
            created_at: model.created_at,
        }
    }
}

impl From<RankedMessageModel> for RankedMessage {
    fn from(model: RankedMessageModel) -> Self {
        RankedMessage {
            id: MessageId::new(model.id),
            body: model.body,
            upvotes: model.upvotes,
        }
    }
}

impl From<UpvoteModel> for Upvote {
    fn from(model: UpvoteModel) -> Self {
        Upvote {
            id: UpvoteId::new(model.id),
            user_id: UserId::new(model.user_id),
            message_id: MessageId::new(model.message_id),
            created_at: model.created_at,
        }
    }
}
