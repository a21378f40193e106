//! Reservation factory for creating test reservation entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// Rows are inserted directly, bypassing the overlap rules, so tests can arrange any
/// starting state.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, user.id, space.id)
///     .window(start, start + Duration::hours(1))
///     .status("cancelled")
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    space_id: i32,
    title: String,
    description: Option<String>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    status: String,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Meeting {id}"` where id is auto-incremented
    /// - start_time: 1 day from now
    /// - end_time: start_time + 1 hour
    /// - status: `"confirmed"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, space_id: i32) -> Self {
        let id = next_id();
        let start_time = Utc::now() + Duration::days(1);
        Self {
            db,
            user_id,
            space_id,
            title: format!("Meeting {}", id),
            description: None,
            start_time,
            end_time: start_time + Duration::hours(1),
            status: "confirmed".to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the booked interval.
    pub fn window(mut self, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    /// Sets the stored status (`pending`, `confirmed` or `cancelled`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let now = Utc::now();
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            space_id: ActiveValue::Set(self.space_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed one-hour reservation starting tomorrow.
pub async fn create_reservation(
    db: &DatabaseConnection,
    user_id: i32,
    space_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, user_id, space_id).build().await
}
