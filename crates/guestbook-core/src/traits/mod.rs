//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ActivationTokenRepository, MessageRepository, RepoResult, UpvoteRepository, UserRepository,
};
