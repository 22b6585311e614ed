//! Message service
//!
//! Creation, reads, search, edits, deletes and the public ranking. Every
//! read goes through the visibility rule; every edit through the ownership
//! rule.

use guestbook_core::entities::{Message, MessageUpdate, NewMessage};
use guestbook_core::{policy, DomainError, MessageId, UserId};
use tracing::{debug, info, instrument};

use crate::dto::{
    CreateMessageRequest, MessageCreatedResponse, MessageResponse, MessageSearchResponse,
    RankedMessageResponse, StatusResponse, UpdateMessageRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a new message owned by `author_id`
    #[instrument(skip(self, request))]
    pub async fn create_message(
        &self,
        author_id: UserId,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageCreatedResponse> {
        Message::validate_body(&request.message)?;

        let message = self
            .ctx
            .message_repo()
            .create(&NewMessage::new(author_id, request.message, request.private))
            .await?;

        info!(message_id = %message.id, private = message.private, "Message created");

        Ok(MessageCreatedResponse {
            message_id: message.id,
        })
    }

    /// Fetch one message if `requester` may see it
    #[instrument(skip(self))]
    pub async fn get_message(
        &self,
        requester: UserId,
        message_id: MessageId,
    ) -> ServiceResult<MessageResponse> {
        let found = self.ctx.message_repo().find_by_id(message_id).await?;
        let message = policy::authorize_read(found, message_id, Some(requester))?;

        Ok(MessageResponse::from(message))
    }

    /// Visible messages, newest first
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        requester: UserId,
        num: Option<i64>,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let limit = self.ctx.pagination().clamp(num);
        let messages = self.ctx.message_repo().list_visible(requester, limit).await?;

        Ok(messages.into_iter().map(MessageResponse::from).collect())
    }

    /// Visible messages whose body contains `term`
    #[instrument(skip(self))]
    pub async fn search_messages(
        &self,
        requester: UserId,
        term: &str,
        num: Option<i64>,
    ) -> ServiceResult<Vec<MessageSearchResponse>> {
        if term.is_empty() {
            return Err(ServiceError::validation("search_term must not be empty"));
        }

        let limit = self.ctx.pagination().clamp(num);
        let messages = self
            .ctx
            .message_repo()
            .search_visible(requester, term, limit)
            .await?;

        debug!(hits = messages.len(), "Message search finished");

        Ok(messages.into_iter().map(MessageSearchResponse::from).collect())
    }

    /// Replace body and privacy of the requester's own message
    ///
    /// A message owned by someone else is reported as not found.
    #[instrument(skip(self, request))]
    pub async fn update_message(
        &self,
        requester: UserId,
        message_id: MessageId,
        request: UpdateMessageRequest,
    ) -> ServiceResult<StatusResponse> {
        self.authorize_mutation(requester, message_id).await?;
        Message::validate_body(&request.message)?;

        let update = MessageUpdate {
            body: request.message,
            private: request.private,
        };
        let changed = self.ctx.message_repo().update(message_id, &update).await?;
        if changed == 0 {
            return Err(DomainError::MessageNotFound(message_id).into());
        }

        info!(message_id = %message_id, "Message updated");

        Ok(StatusResponse::new("Message updated"))
    }

    /// Delete the requester's own message together with its upvotes
    #[instrument(skip(self))]
    pub async fn delete_message(
        &self,
        requester: UserId,
        message_id: MessageId,
    ) -> ServiceResult<StatusResponse> {
        self.authorize_mutation(requester, message_id).await?;

        let removed = self.ctx.message_repo().delete(message_id).await?;
        if removed == 0 {
            return Err(DomainError::MessageNotFound(message_id).into());
        }

        info!(message_id = %message_id, "Message deleted");

        Ok(StatusResponse::new("Message deleted"))
    }

    /// Public messages ranked by upvotes; needs no requester
    #[instrument(skip(self))]
    pub async fn most_upvoted(&self, num: Option<i64>) -> ServiceResult<Vec<RankedMessageResponse>> {
        let limit = self.ctx.pagination().clamp(num);
        let ranked = self.ctx.message_repo().most_upvoted(limit).await?;

        Ok(ranked.into_iter().map(RankedMessageResponse::from).collect())
    }

    async fn authorize_mutation(&self, requester: UserId, message_id: MessageId) -> ServiceResult<()> {
        let message = self.ctx.message_repo().find_by_id(message_id).await?;

        policy::authorize_mutation(message.as_ref(), message_id, requester).map_err(|e| {
            debug!(message_id = %message_id, reason = %e, "Message mutation denied");
            ServiceError::from(e.conceal_ownership())
        })
    }
}
