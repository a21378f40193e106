//! Bearer-token authentication guard.
//!
//! Handlers build an `AuthGuard` from the request headers and call `require` with the
//! permissions the endpoint needs. Token resolution goes through an `IdentityVerifier` so the
//! credential store can be swapped without touching handlers.

use async_trait::async_trait;
use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    data::access_token::AccessTokenRepository,
    error::{auth::AuthError, AppError},
    model::auth::Identity,
    service::clock::Clock,
};

/// Resolves a bearer token to the identity it was issued for.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// # Returns
    /// - `Ok(Identity)` - Token is valid
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token unknown or expired
    async fn resolve(&self, token: &str) -> Result<Identity, AppError>;
}

/// Verifies tokens against the `access_token` table.
pub struct AccessTokenVerifier {
    db: DatabaseConnection,
    clock: Arc<dyn Clock>,
}

impl AccessTokenVerifier {
    pub fn new(db: DatabaseConnection, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }
}

#[async_trait]
impl IdentityVerifier for AccessTokenVerifier {
    async fn resolve(&self, token: &str) -> Result<Identity, AppError> {
        let user = AccessTokenRepository::new(&self.db)
            .find_user_by_active_token(token, self.clock.now())
            .await?
            .ok_or(AuthError::InvalidToken)?;

        Ok(Identity {
            user_id: user.id,
            role: user.role,
        })
    }
}

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    verifier: &'a dyn IdentityVerifier,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(verifier: &'a dyn IdentityVerifier, headers: &'a HeaderMap) -> Self {
        Self { verifier, headers }
    }

    /// Authenticates the request and checks every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Caller is authenticated and holds all permissions
    /// - `Err(AppError::AuthErr(MissingToken | InvalidToken))` - 401
    /// - `Err(AppError::AuthErr(AccessDenied))` - 403
    pub async fn require(&self, permissions: &[Permission]) -> Result<Identity, AppError> {
        let token = self.token().ok_or(AuthError::MissingToken)?;
        let identity = self.verifier.resolve(token).await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !identity.is_admin() {
                        return Err(AuthError::AccessDenied(
                            identity.user_id,
                            "User attempted an admin-only operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(identity)
    }

    /// The bearer token of the request, if the `Authorization` header carries one.
    pub fn token(&self) -> Option<&'a str> {
        let value = self.headers.get(AUTHORIZATION)?.to_str().ok()?;
        let (scheme, token) = value.split_once(' ')?;

        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }

        let token = token.trim();
        (!token.is_empty()).then_some(token)
    }
}
