//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::MessageId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found
    // =========================================================================
    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Message must be 1-{max} characters")]
    InvalidMessageLength { max: usize },

    #[error("Account already activated")]
    AccountAlreadyActive,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not message author: {0}")]
    NotMessageAuthor(MessageId),

    #[error("Cannot upvote own message")]
    SelfUpvote,

    #[error("Message already upvoted")]
    AlreadyUpvoted,

    #[error("Invalid activation token")]
    InvalidActivationToken,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already registered")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",

            // Validation
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::InvalidMessageLength { .. } => "INVALID_MESSAGE_LENGTH",
            Self::AccountAlreadyActive => "ACCOUNT_ALREADY_ACTIVE",

            // Authorization
            Self::NotMessageAuthor(_) => "NOT_MESSAGE_AUTHOR",
            Self::SelfUpvote => "SELF_UPVOTE",
            Self::AlreadyUpvoted => "ALREADY_UPVOTED",
            Self::InvalidActivationToken => "INVALID_TOKEN",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Report a wrong-owner denial as a missing message
    ///
    /// Mutation endpoints answer identically for "does not exist" and
    /// "exists but belongs to someone else". Every other error passes through.
    pub fn conceal_ownership(self) -> Self {
        match self {
            Self::NotMessageAuthor(id) => Self::MessageNotFound(id),
            other => other,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MessageNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmail
                | Self::WeakPassword(_)
                | Self::InvalidMessageLength { .. }
                | Self::AccountAlreadyActive
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotMessageAuthor(_)
                | Self::SelfUpvote
                | Self::AlreadyUpvoted
                | Self::InvalidActivationToken
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }
}
