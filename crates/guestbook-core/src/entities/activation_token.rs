//! Activation token - single-use link between a registration and its account

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationToken {
    pub token: Uuid,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub redeemed_at: Option<DateTime<Utc>>,
}

impl ActivationToken {
    #[inline]
    pub fn is_redeemed(&self) -> bool {
        self.redeemed_at.is_some()
    }
}
