//! Business logic services

pub mod account;
pub mod context;
pub mod error;
pub mod message;
pub mod upvote;

pub use account::AccountService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use upvote::UpvoteService;
