//! User service for business logic.
//!
//! This module provides the `UserService` for the admin-managed user roster and for
//! self-service profile edits. Passwords are hashed here before they reach the data layer.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::{
        auth::Identity,
        user::{CreateUserParam, NewUserRecord, Role, UpdateUserParam, User, UserChanges},
    },
    service::auth::hash_password,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every account. Admin only, enforced by the caller.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).list().await
    }

    /// Gets an account visible to the requester: their own, or any for admins.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::AuthErr(AccessDenied))` - Requester is neither the user nor an admin
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get(&self, requester: &Identity, id: i32) -> Result<User, AppError> {
        Self::authorize(requester, id)?;

        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Creates an account with a hashed password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::ValidationErr)` - Email already in use
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_taken(&param.email, None).await? {
            return Err(email_taken().into());
        }

        let user = repo
            .create(NewUserRecord {
                name: param.name,
                email: param.email,
                password_hash: hash_password(&param.password)?,
                role: param.role,
            })
            .await?;

        tracing::info!(user_id = user.id, role = user.role.as_str(), "User created");

        Ok(user)
    }

    /// Applies a partial update to the requester's own account, or any account for admins.
    ///
    /// Only admins may change a role; a non-admin sending one is rejected with a validation
    /// error on `role`.
    pub async fn update(
        &self,
        requester: &Identity,
        id: i32,
        param: UpdateUserParam,
    ) -> Result<User, AppError> {
        Self::authorize(requester, id)?;

        if param.role.is_some() && !requester.is_admin() {
            return Err(ValidationError::field("role", "The role field is prohibited.").into());
        }

        let repo = UserRepository::new(self.db);

        if let Some(email) = &param.email {
            if repo.email_taken(email, Some(id)).await? {
                return Err(email_taken().into());
            }
        }

        let password_hash = param
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let user = repo
            .update(
                id,
                UserChanges {
                    name: param.name,
                    email: param.email,
                    password_hash,
                    role: param.role,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(user_id = user.id, updated_by = requester.user_id, "User updated");

        Ok(user)
    }

    /// Deletes an account; its reservations and tokens cascade. Admin only.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!(user_id = id, "User deleted");

        Ok(())
    }

    /// Makes sure at least one admin exists at startup.
    ///
    /// When no admin exists, the account with `email` is promoted, or created with the given
    /// name and password if it does not exist yet.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - An admin was created or promoted
    /// - `Ok(None)` - An admin already existed
    pub async fn ensure_admin(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.admin_exists().await? {
            return Ok(None);
        }

        if let Some((existing, _)) = repo.find_credentials_by_email(email).await? {
            let promoted = repo
                .update(
                    existing.id,
                    UserChanges {
                        role: Some(Role::Admin),
                        ..Default::default()
                    },
                )
                .await?;

            return Ok(promoted);
        }

        let admin = self
            .create(CreateUserParam {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                role: Role::Admin,
            })
            .await?;

        Ok(Some(admin))
    }

    fn authorize(requester: &Identity, user_id: i32) -> Result<(), AppError> {
        if requester.can_act_for(user_id) {
            return Ok(());
        }

        Err(AuthError::AccessDenied(
            requester.user_id,
            format!("attempted to access account {}", user_id),
        )
        .into())
    }
}

fn email_taken() -> ValidationError {
    ValidationError::field("email", "The email has already been taken.")
}
