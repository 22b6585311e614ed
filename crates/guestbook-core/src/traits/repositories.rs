//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    ActivationToken, Message, MessageUpdate, NewMessage, NewUpvote, NewUser, RankedMessage,
    Upvote, User,
};
use crate::error::DomainError;
use crate::value_objects::{MessageId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Store a new inactive user together with its activation token
    ///
    /// Fails with `EmailAlreadyExists` when the email is taken.
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Activation Token Repository
// ============================================================================

#[async_trait]
pub trait ActivationTokenRepository: Send + Sync {
    /// Find a token, redeemed or not
    async fn find(&self, token: Uuid) -> RepoResult<Option<ActivationToken>>;

    /// Mark the token redeemed and activate its user in one step
    ///
    /// Fails with `AccountAlreadyActive` if either was already done.
    async fn redeem(&self, token: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID, regardless of visibility
    async fn find_by_id(&self, id: MessageId) -> RepoResult<Option<Message>>;

    /// List messages visible to `requester`, newest first
    async fn list_visible(&self, requester: UserId, limit: i64) -> RepoResult<Vec<Message>>;

    /// List messages visible to `requester` whose body contains `term`
    async fn search_visible(
        &self,
        requester: UserId,
        term: &str,
        limit: i64,
    ) -> RepoResult<Vec<Message>>;

    /// Public messages with at least one upvote, highest tally first
    async fn most_upvoted(&self, limit: i64) -> RepoResult<Vec<RankedMessage>>;

    /// Create a new message and return it with its generated id
    async fn create(&self, message: &NewMessage) -> RepoResult<Message>;

    /// Replace body and privacy; returns the number of rows changed
    async fn update(&self, id: MessageId, update: &MessageUpdate) -> RepoResult<u64>;

    /// Delete a message (and its upvotes); returns the number of rows removed
    async fn delete(&self, id: MessageId) -> RepoResult<u64>;
}

// ============================================================================
// Upvote Repository
// ============================================================================

#[async_trait]
pub trait UpvoteRepository: Send + Sync {
    /// Insert an upvote
    ///
    /// Fails with `AlreadyUpvoted` when the (user, message) pair exists.
    async fn create(&self, upvote: &NewUpvote) -> RepoResult<Upvote>;
}
