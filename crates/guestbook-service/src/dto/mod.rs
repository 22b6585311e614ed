//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateMessageRequest, RegisterRequest, UpdateMessageRequest};

pub use responses::{
    HealthChecks, HealthResponse, MessageCreatedResponse, MessageResponse, MessageSearchResponse,
    RankedMessageResponse, ReadinessResponse, RegisterResponse, StatusResponse,
};
