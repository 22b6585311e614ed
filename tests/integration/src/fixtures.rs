//! Test fixtures and data generators
//!
//! Provides reusable request and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique suffix that also differs between runs against the same database
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{nanos}_{n}")
}

/// Registration body, reused as Basic credentials
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn unique() -> Self {
        Self {
            email: format!("guest_{}@example.com", unique_suffix()),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Registration response
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i64,
}

/// Create or update message request
#[derive(Debug, Serialize)]
pub struct MessageRequest {
    pub message: String,
    pub private: bool,
}

impl MessageRequest {
    pub fn public(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            private: false,
        }
    }

    pub fn private(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            private: true,
        }
    }
}

/// Response to message creation
#[derive(Debug, Deserialize)]
pub struct MessageCreated {
    pub message_id: i64,
}

/// Message as listed or fetched
#[derive(Debug, Deserialize)]
pub struct MessageView {
    pub id: i64,
    pub message: String,
    pub created_at: String,
}

/// Search hit
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub id: i64,
    pub message: String,
    pub private: bool,
}

/// Ranking entry
#[derive(Debug, Deserialize)]
pub struct RankedView {
    pub id: i64,
    pub message: String,
    pub upvotes: i64,
}

/// `{"status": ...}` confirmation
#[derive(Debug, Deserialize)]
pub struct Status {
    pub status: String,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
