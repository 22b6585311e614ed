//! User and activation token model -> entity mappers

use guestbook_core::entities::{ActivationToken, User};
use guestbook_core::value_objects::UserId;

use crate::models::{ActivationTokenModel, UserModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            email: model.email,
            active: model.active,
            activated_at: model.activated_at,
            created_at: model.created_at,
        }
    }
}

impl From<ActivationTokenModel> for ActivationToken {
    fn from(model: ActivationTokenModel) -> Self {
        ActivationToken {
            token: model.token,
            user_id: UserId::new(model.user_id),
            created_at: model.created_at,
            redeemed_at: model.redeemed_at,
        }
    }
}
