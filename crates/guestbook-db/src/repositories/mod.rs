//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! guestbook-core. Each repository owns a clone of the pool.

mod activation_token;
mod error;
mod message;
mod upvote;
mod user;

pub use activation_token::PgActivationTokenRepository;
pub use message::PgMessageRepository;
pub use upvote::PgUpvoteRepository;
pub use user::PgUserRepository;
