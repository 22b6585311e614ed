//! Response DTOs for API endpoints
//!
//! Message bodies are exposed under the `message` key; authors are never
//! exposed.

use chrono::{DateTime, Utc};
use guestbook_core::{MessageId, UserId};
use serde::Serialize;

// ============================================================================
// Message Responses
// ============================================================================

/// Returned after a message is stored
#[derive(Debug, Clone, Serialize)]
pub struct MessageCreatedResponse {
    pub message_id: MessageId,
}

/// A message as shown by single fetch and listing
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: MessageId,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A search hit; tells the author which hits are private
#[derive(Debug, Clone, Serialize)]
pub struct MessageSearchResponse {
    pub id: MessageId,
    pub message: String,
    pub private: bool,
}

/// Entry of the most-upvoted ranking
#[derive(Debug, Clone, Serialize)]
pub struct RankedMessageResponse {
    pub id: MessageId,
    pub message: String,
    pub upvotes: i64,
}

/// Plain confirmation
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

// ============================================================================
// Account Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: UserId,
}

impl RegisterResponse {
    pub fn created(user_id: UserId) -> Self {
        Self {
            message: "User created".to_string(),
            user_id,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health of each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
