//! Space catalog repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::space::{CreateSpaceParam, Space, SpaceFilter, UpdateSpaceParam},
};

pub struct SpaceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpaceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new space.
    pub async fn create(&self, param: CreateSpaceParam) -> Result<Space, AppError> {
        let now = Utc::now();
        let entity = entity::space::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            capacity: ActiveValue::Set(param.capacity),
            location: ActiveValue::Set(param.location),
            is_active: ActiveValue::Set(param.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Space::from_entity(entity))
    }

    /// Finds a space by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Space))` - Space found
    /// - `Ok(None)` - No space with that ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Space>, AppError> {
        let entity = entity::prelude::Space::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Space::from_entity))
    }

    /// Lists spaces ordered by ID, optionally only those with the given active flag.
    pub async fn list(&self, filter: SpaceFilter) -> Result<Vec<Space>, AppError> {
        let mut query = entity::prelude::Space::find();

        if let Some(is_active) = filter.is_active {
            query = query.filter(entity::space::Column::IsActive.eq(is_active));
        }

        let spaces = query
            .order_by_asc(entity::space::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Space::from_entity)
            .collect();

        Ok(spaces)
    }

    /// Loads the spaces with the given IDs, in no particular order.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Space>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let spaces = entity::prelude::Space::find()
            .filter(entity::space::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(Space::from_entity)
            .collect();

        Ok(spaces)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Space))` - The updated space
    /// - `Ok(None)` - No space with that ID
    pub async fn update(&self, id: i32, param: UpdateSpaceParam) -> Result<Option<Space>, AppError> {
        let Some(existing) = entity::prelude::Space::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(capacity) = param.capacity {
            active.capacity = ActiveValue::Set(capacity);
        }
        if let Some(location) = param.location {
            active.location = ActiveValue::Set(Some(location));
        }
        if let Some(is_active) = param.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Space::from_entity(entity)))
    }

    /// Deletes a space; its reservations cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Space::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
