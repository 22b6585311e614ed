//! # guestbook-service
//!
//! Application layer: each use case reads through the repositories, asks the
//! domain policy for a decision, then writes.

pub mod dto;
pub mod services;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use dto::{
    CreateMessageRequest, HealthChecks, HealthResponse, MessageCreatedResponse, MessageResponse,
    MessageSearchResponse, RankedMessageResponse, ReadinessResponse, RegisterRequest,
    RegisterResponse, StatusResponse, UpdateMessageRequest,
};
pub use services::{
    AccountService, MessageService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UpvoteService,
};
