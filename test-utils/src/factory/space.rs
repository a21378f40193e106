//! Space factory for creating test space entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test spaces with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::space::SpaceFactory;
///
/// let space = SpaceFactory::new(&db)
///     .name("Board Room")
///     .capacity(12)
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct SpaceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    capacity: i32,
    location: Option<String>,
    is_active: bool,
}

impl<'a> SpaceFactory<'a> {
    /// Creates a new SpaceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Room {id}"` where id is auto-incremented
    /// - description: `None`
    /// - capacity: `8`
    /// - location: `Some("Floor 1")`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Room {}", id),
            description: None,
            capacity: 8,
            location: Some("Floor 1".to_string()),
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    /// Sets whether the space accepts new bookings.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the space entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::space::Model)` - Created space entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::space::Model, DbErr> {
        let now = Utc::now();
        entity::space::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            capacity: ActiveValue::Set(self.capacity),
            location: ActiveValue::Set(self.location),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active space with default values.
pub async fn create_space(db: &DatabaseConnection) -> Result<entity::space::Model, DbErr> {
    SpaceFactory::new(db).build().await
}
