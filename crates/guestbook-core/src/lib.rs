//! # guestbook-core
//!
//! Domain layer containing entities, typed ids, repository traits and the
//! message visibility and voting policy.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ActivationToken, Message, MessageUpdate, NewMessage, NewUpvote, NewUser, RankedMessage,
    Upvote, User,
};
pub use error::DomainError;
pub use traits::{
    ActivationTokenRepository, MessageRepository, RepoResult, UpvoteRepository, UserRepository,
};
pub use value_objects::{IdParseError, MessageId, UpvoteId, UserId};
