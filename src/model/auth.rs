use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug)]
pub struct RegisterDto {
    #[garde(length(min = 1, max = 255))]
    pub name: String,
    #[garde(email, length(max = 255))]
    pub email: String,
    #[garde(length(min = 8))]
    pub password: String,
    #[garde(matches(password))]
    pub password_confirmation: String,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug)]
pub struct LoginDto {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

/// Bearer token issued on login or registration.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserDto,
}
