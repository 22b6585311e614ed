//! User entity - a guestbook account

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::UserId;

/// User entity
///
/// The password hash is not part of the entity; repositories hand it out
/// separately for credential checks only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub active: bool,
    pub activated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if the account may authenticate
    #[inline]
    pub fn can_authenticate(&self) -> bool {
        self.active
    }
}

/// A registration ready to be stored
///
/// Stored together with its activation token so that every account gets
/// exactly one.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub activation_token: Uuid,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            activation_token: Uuid::new_v4(),
        }
    }
}
