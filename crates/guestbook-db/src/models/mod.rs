//! Database models - SQLx-compatible structs for PostgreSQL tables

mod activation_token;
mod message;
mod upvote;
mod user;

pub use activation_token::ActivationTokenModel;
pub use message::{MessageModel, RankedMessageModel};
pub use upvote::UpvoteModel;
pub use user::UserModel;
