//! Identity and token models for authentication

use chrono::{DateTime, Utc};

use crate::{model::auth::TokenDto, server::model::user::{Role, User}};

/// The caller behind a verified bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// True when the caller is `user_id` or an admin.
    pub fn can_act_for(&self, user_id: i32) -> bool {
        self.is_admin() || self.user_id == user_id
    }
}

/// A freshly issued bearer token with the account it belongs to.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

impl IssuedToken {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            access_token: self.token,
            token_type: "Bearer".to_string(),
            expires_at: self.expires_at,
            user: self.user.into_dto(),
        }
    }
}
