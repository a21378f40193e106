//! Domain & parameter models for user operations

use chrono::{DateTime, Utc};

use crate::{
    model::{
        auth::RegisterDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::error::{internal::InternalError, validation::ValidationError, AppError},
};

/// Role granted to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Parses the stored or submitted representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Parses a role submitted in a request, reporting failures against `role`.
    pub fn from_request(value: &str) -> Result<Self, ValidationError> {
        Self::parse(value)
            .ok_or_else(|| ValidationError::field("role", "The selected role is invalid."))
    }
}

/// The user domain model. Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to the user domain model
    ///
    /// # Returns
    /// - `Ok(User)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownRole))` - Stored role is not recognised
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::parse(&entity.role)
            .ok_or_else(|| InternalError::UnknownRole(entity.role.clone(), entity.id))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a user; `password` is plain text and hashed by the service.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Parameters for a partial user update.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// Column values written by the repository when inserting a user.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Column values written by the repository when updating a user.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}

impl TryFrom<CreateUserDto> for CreateUserParam {
    type Error = ValidationError;

    fn try_from(dto: CreateUserDto) -> Result<Self, Self::Error> {
        let role = match dto.role.as_deref() {
            Some(role) => Role::from_request(role)?,
            None => Role::User,
        };

        Ok(Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role,
        })
    }
}

impl TryFrom<UpdateUserDto> for UpdateUserParam {
    type Error = ValidationError;

    fn try_from(dto: UpdateUserDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role: dto
                .role
                .map(|role| Role::from_request(&role))
                .transpose()?,
        })
    }
}

impl From<RegisterDto> for CreateUserParam {
    fn from(dto: RegisterDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role: Role::User,
        }
    }
}
