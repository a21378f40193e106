//! Access token factory for creating bearer tokens in tests.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating access tokens with customizable fields.
pub struct AccessTokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token: String,
    expires_at: DateTime<Utc>,
}

impl<'a> AccessTokenFactory<'a> {
    /// Creates a new AccessTokenFactory with default values.
    ///
    /// Defaults:
    /// - token: `"test-token-{id}"` where id is auto-incremented
    /// - expires_at: 1 hour from now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token: format!("test-token-{}", next_id()),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Builds and inserts the access token into the database.
    pub async fn build(self) -> Result<entity::access_token::Model, DbErr> {
        entity::access_token::ActiveModel {
            id: ActiveValue::NotSet,
            token: ActiveValue::Set(self.token),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(self.expires_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a token for the user that expires in one hour.
pub async fn create_access_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::access_token::Model, DbErr> {
    AccessTokenFactory::new(db, user_id).build().await
}
