//! Domain entities - core business objects

mod activation_token;
mod message;
mod upvote;
mod user;

pub use activation_token::ActivationToken;
pub use message::{Message, MessageUpdate, NewMessage, RankedMessage};
pub use upvote::{NewUpvote, Upvote};
pub use user::{NewUser, User};
