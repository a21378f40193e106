//! Bearer token persistence.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::server::{error::AppError, model::user::User};

pub struct AccessTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccessTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a newly issued token for `user_id`.
    pub async fn create(
        &self,
        user_id: i32,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::access_token::Model, AppError> {
        let entity = entity::access_token::ActiveModel {
            token: ActiveValue::Set(token),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity)
    }

    /// Resolves a token that has not expired at `now` to its owner.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token is valid and its user exists
    /// - `Ok(None)` - Token unknown or expired
    pub async fn find_user_by_active_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, AppError> {
        let found = entity::prelude::AccessToken::find()
            .filter(entity::access_token::Column::Token.eq(token))
            .filter(entity::access_token::Column::ExpiresAt.gt(now))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        match found {
            Some((_, Some(user))) => Ok(Some(User::from_entity(user)?)),
            _ => Ok(None),
        }
    }

    /// Revokes a single token.
    pub async fn delete_by_token(&self, token: &str) -> Result<bool, AppError> {
        let result = entity::prelude::AccessToken::delete_many()
            .filter(entity::access_token::Column::Token.eq(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes tokens that expired before `now`.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = entity::prelude::AccessToken::delete_many()
            .filter(entity::access_token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
