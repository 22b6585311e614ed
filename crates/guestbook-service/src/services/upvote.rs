//! Upvote service

use guestbook_core::{policy, MessageId, UserId};
use tracing::{info, instrument};

use crate::dto::StatusResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Upvote service
pub struct UpvoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UpvoteService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Upvote a message on behalf of `requester`
    ///
    /// Checked in order: the message must exist and be visible, must not be
    /// the requester's own, and must not already carry their upvote. The last
    /// check is the store's unique constraint on insert.
    #[instrument(skip(self))]
    pub async fn upvote(
        &self,
        requester: UserId,
        message_id: MessageId,
    ) -> ServiceResult<StatusResponse> {
        let message = self.ctx.message_repo().find_by_id(message_id).await?;
        let upvote = policy::authorize_upvote(message.as_ref(), message_id, requester)?;

        let stored = self.ctx.upvote_repo().create(&upvote).await?;

        info!(upvote_id = %stored.id, message_id = %message_id, "Message upvoted");

        Ok(StatusResponse::new(format!(
            "Successfully upvoted message with id {message_id}. Thank you!"
        )))
    }
}
