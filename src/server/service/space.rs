//! Space catalog service.
//!
//! Callers gate create/update/delete behind the admin permission before reaching here.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::space::SpaceRepository,
    error::AppError,
    model::space::{CreateSpaceParam, Space, SpaceFilter, UpdateSpaceParam},
};

pub struct SpaceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpaceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, filter: SpaceFilter) -> Result<Vec<Space>, AppError> {
        SpaceRepository::new(self.db).list(filter).await
    }

    /// # Returns
    /// - `Ok(Space)` - The space
    /// - `Err(AppError::NotFound)` - No space with that ID
    pub async fn get(&self, id: i32) -> Result<Space, AppError> {
        SpaceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Space not found".to_string()))
    }

    pub async fn create(&self, param: CreateSpaceParam) -> Result<Space, AppError> {
        let space = SpaceRepository::new(self.db).create(param).await?;

        tracing::info!(space_id = space.id, name = %space.name, "Space created");

        Ok(space)
    }

    /// Applies a partial update. Deactivating a space keeps its existing reservations.
    pub async fn update(&self, id: i32, param: UpdateSpaceParam) -> Result<Space, AppError> {
        let space = SpaceRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Space not found".to_string()))?;

        tracing::info!(
            space_id = space.id,
            is_active = space.is_active,
            "Space updated"
        );

        Ok(space)
    }

    /// Deletes a space together with all of its reservations.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !SpaceRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Space not found".to_string()));
        }

        tracing::info!(space_id = id, "Space deleted");

        Ok(())
    }
}
