//! Authentication service.
//!
//! Handles registration, password login and bearer token issuance. Tokens are random
//! opaque strings stored in the `access_token` table and resolved back to an identity by
//! `middleware::auth::AccessTokenVerifier`.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Duration;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{access_token::AccessTokenRepository, user::UserRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        auth::{Identity, IssuedToken},
        user::{CreateUserParam, Role, User},
    },
    service::{clock::Clock, user::UserService},
};

/// Length of issued bearer tokens.
const TOKEN_LENGTH: usize = 48;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
    token_ttl: Duration,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `clock` - Time source for token expiry
    /// - `token_ttl` - Lifetime of issued tokens
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock, token_ttl: Duration) -> Self {
        Self {
            db,
            clock,
            token_ttl,
        }
    }

    /// Creates a regular account and signs it in.
    ///
    /// The requested role is ignored; self-registered accounts are always `user`.
    pub async fn register(&self, param: CreateUserParam) -> Result<IssuedToken, AppError> {
        let user = UserService::new(self.db)
            .create(CreateUserParam {
                role: Role::User,
                ..param
            })
            .await?;

        self.issue_token(user).await
    }

    /// Exchanges email and password for a bearer token.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Credentials matched
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AppError> {
        let Some((user, password_hash)) = UserRepository::new(self.db)
            .find_credentials_by_email(email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &password_hash) {
            tracing::debug!(user_id = user.id, "Rejected login with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let purged = AccessTokenRepository::new(self.db)
            .delete_expired(self.clock.now())
            .await?;
        if purged > 0 {
            tracing::debug!(purged, "Purged expired access tokens");
        }

        self.issue_token(user).await
    }

    /// Revokes the presented token.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        AccessTokenRepository::new(self.db)
            .delete_by_token(token)
            .await?;

        Ok(())
    }

    /// Loads the account behind a verified identity.
    pub async fn me(&self, identity: &Identity) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(identity.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn issue_token(&self, user: User) -> Result<IssuedToken, AppError> {
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(self.token_ttl)
            .ok_or(InternalError::TokenExpiryOverflow(user.id))?;
        let token = AccessTokenRepository::new(self.db)
            .create(user.id, generate_token(), expires_at)
            .await?;

        tracing::info!(user_id = user.id, "Issued access token");

        Ok(IssuedToken {
            token: token.token,
            expires_at: token.expires_at,
            user,
        })
    }
}

/// Hashes a password with argon2 and a random salt, returning the PHC string.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC string. Malformed hashes never verify.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Generates a random alphanumeric bearer token.
fn generate_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
