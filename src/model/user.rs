use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// `user` or `admin`
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug)]
pub struct CreateUserDto {
    #[garde(length(min = 1, max = 255))]
    pub name: String,
    #[garde(email, length(max = 255))]
    pub email: String,
    #[garde(length(min = 8))]
    pub password: String,
    /// Defaults to `user`
    #[garde(skip)]
    pub role: Option<String>,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug, Default)]
pub struct UpdateUserDto {
    #[garde(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[garde(email, length(max = 255))]
    pub email: Option<String>,
    #[garde(length(min = 8))]
    pub password: Option<String>,
    /// Only admins may change roles
    #[garde(skip)]
    pub role: Option<String>,
}
