//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use chrono::Duration;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    middleware::auth::{AccessTokenVerifier, IdentityVerifier},
    service::{
        clock::{Clock, SystemClock},
        reservation::lock::SpaceLocks,
    },
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the connection is a pool handle and everything else sits
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Per-space write locks shared by every reservation write in this process.
    pub space_locks: SpaceLocks,

    /// Time source for booking rules and token expiry.
    pub clock: Arc<dyn Clock>,

    /// Resolves bearer tokens to identities.
    pub verifier: Arc<dyn IdentityVerifier>,

    /// Lifetime of newly issued access tokens.
    pub token_ttl: Duration,
}

impl AppState {
    /// Creates the production state: system clock and database-backed token verification.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_ttl` - Lifetime of issued access tokens
    pub fn new(db: DatabaseConnection, token_ttl: Duration) -> Self {
        Self::with_clock(db, token_ttl, Arc::new(SystemClock))
    }

    /// Creates state around a custom time source.
    pub fn with_clock(db: DatabaseConnection, token_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        let verifier = Arc::new(AccessTokenVerifier::new(db.clone(), clock.clone()));

        Self {
            db,
            space_locks: SpaceLocks::new(),
            clock,
            verifier,
            token_ttl,
        }
    }
}
