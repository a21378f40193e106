//! Domain & parameter models for the space catalog

use chrono::{DateTime, Utc};

use crate::model::space::{CreateSpaceDto, SpaceDto, SpaceListQuery, UpdateSpaceDto};

/// A bookable space.
#[derive(Debug, Clone, PartialEq)]
pub struct Space {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub capacity: i32,
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Space {
    pub fn from_entity(entity: entity::space::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            capacity: entity.capacity,
            location: entity.location,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> SpaceDto {
        SpaceDto {
            id: self.id,
            name: self.name,
            description: self.description,
            capacity: self.capacity,
            location: self.location,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSpaceParam {
    pub name: String,
    pub description: Option<String>,
    pub capacity: i32,
    pub location: Option<String>,
    pub is_active: bool,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateSpaceParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
}

/// Catalog listing filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceFilter {
    pub is_active: Option<bool>,
}

impl From<CreateSpaceDto> for CreateSpaceParam {
    fn from(dto: CreateSpaceDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            capacity: dto.capacity,
            location: dto.location,
            is_active: dto.is_active.unwrap_or(true),
        }
    }
}

impl From<UpdateSpaceDto> for UpdateSpaceParam {
    fn from(dto: UpdateSpaceDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            capacity: dto.capacity,
            location: dto.location,
            is_active: dto.is_active,
        }
    }
}

impl From<SpaceListQuery> for SpaceFilter {
    fn from(query: SpaceListQuery) -> Self {
        Self {
            is_active: query.is_active,
        }
    }
}
