//! Message visibility and voting authority
//!
//! Pure decision functions over rows that the caller has already fetched.
//! Nothing here touches storage; services read, call into this module, then
//! write.
//!
//! Rules:
//! - A message is visible iff it is public or the requester wrote it.
//! - Only the author may update or delete a message.
//! - Upvotes are checked in a fixed order: existence and visibility, then
//!   self-upvote. The duplicate check belongs to the store's unique
//!   constraint and runs when the upvote is inserted.

use crate::entities::{ActivationToken, Message, NewUpvote, User};
use crate::error::DomainError;
use crate::value_objects::{MessageId, UserId};

/// Check whether `requester` may see `message`
///
/// Anonymous requesters (`None`) only ever see public messages.
#[inline]
pub fn is_visible_to(message: &Message, requester: Option<UserId>) -> bool {
    message.is_public() || requester.is_some_and(|user_id| message.is_owned_by(user_id))
}

/// Resolve a fetched row into a readable message
///
/// A private message belonging to someone else is reported exactly like a
/// missing one.
pub fn authorize_read(
    message: Option<Message>,
    id: MessageId,
    requester: Option<UserId>,
) -> Result<Message, DomainError> {
    match message {
        Some(message) if is_visible_to(&message, requester) => Ok(message),
        _ => Err(DomainError::MessageNotFound(id)),
    }
}

/// Decide whether `requester` may update or delete a message
///
/// Keeps `MessageNotFound` and `NotMessageAuthor` apart; callers that must
/// not leak existence use [`DomainError::conceal_ownership`].
pub fn authorize_mutation(
    message: Option<&Message>,
    id: MessageId,
    requester: UserId,
) -> Result<(), DomainError> {
    let message = message.ok_or(DomainError::MessageNotFound(id))?;

    if !message.is_owned_by(requester) {
        return Err(DomainError::NotMessageAuthor(id));
    }

    Ok(())
}

/// Decide whether `requester` may upvote a message
///
/// Returns the upvote to insert. A duplicate is only detected by the insert
/// itself.
pub fn authorize_upvote(
    message: Option<&Message>,
    id: MessageId,
    requester: UserId,
) -> Result<NewUpvote, DomainError> {
    let message = match message {
        Some(message) if is_visible_to(message, Some(requester)) => message,
        _ => return Err(DomainError::MessageNotFound(id)),
    };

    if message.is_owned_by(requester) {
        return Err(DomainError::SelfUpvote);
    }

    Ok(NewUpvote::new(requester, message.id))
}

/// Decide whether a token may activate its account
pub fn authorize_activation(token: &ActivationToken, user: &User) -> Result<(), DomainError> {
    if user.active || token.is_redeemed() {
        return Err(DomainError::AccountAlreadyActive);
    }
    Ok(())
}
