//! Reservation store.
//!
//! Provides the `ReservationRepository` for persisting reservations and for the range
//! queries the overlap rules and calendar rely on. All range predicates use the half-open
//! form `start < other_end AND end > other_start`, which the
//! `(space_id, start_time, end_time)` index serves.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Select,
};

use crate::server::{
    error::AppError,
    model::reservation::{
        NewReservationRecord, Reservation, ReservationChanges, ReservationEdit,
        ReservationFilter, ReservationStatus, TimeWindow,
    },
    util::time::DayRange,
};

use entity::reservation::Column;

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a reservation. Overlap rules are the caller's responsibility.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation
    /// - `Err(AppError::DbErr)` - Database error, e.g. unknown user or space
    pub async fn create(&self, record: NewReservationRecord) -> Result<Reservation, AppError> {
        let now = Utc::now();
        let entity = entity::reservation::ActiveModel {
            user_id: ActiveValue::Set(record.user_id),
            space_id: ActiveValue::Set(record.space_id),
            title: ActiveValue::Set(record.title),
            description: ActiveValue::Set(record.description),
            start_time: ActiveValue::Set(record.window.start()),
            end_time: ActiveValue::Set(record.window.end()),
            status: ActiveValue::Set(record.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Reservation::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, AppError> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .map(Reservation::from_entity)
            .transpose()
    }

    /// Finds the first confirmed reservation on `space_id` whose interval overlaps `window`.
    ///
    /// Touching boundaries are not overlaps. Results are ordered by start time, then ID, so
    /// the earliest conflict is returned.
    ///
    /// # Arguments
    /// - `space_id` - Space to check
    /// - `window` - Candidate interval
    /// - `exclude_id` - Reservation to ignore, used when a reservation is moved
    pub async fn find_confirmed_overlapping(
        &self,
        space_id: i32,
        window: TimeWindow,
        exclude_id: Option<i32>,
    ) -> Result<Option<Reservation>, AppError> {
        let mut query = entity::prelude::Reservation::find()
            .filter(Column::SpaceId.eq(space_id))
            .filter(Column::Status.eq(ReservationStatus::Confirmed.as_str()))
            .filter(Column::StartTime.lt(window.end()))
            .filter(Column::EndTime.gt(window.start()));

        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }

        query
            .order_by_asc(Column::StartTime)
            .order_by_asc(Column::Id)
            .one(self.db)
            .await?
            .map(Reservation::from_entity)
            .transpose()
    }

    /// Lists reservations owned by `user_id`, ordered by start time.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        filter: ReservationFilter,
    ) -> Result<Vec<Reservation>, AppError> {
        let mut query = entity::prelude::Reservation::find().filter(Column::UserId.eq(user_id));

        if let Some(space_id) = filter.space_id {
            query = query.filter(Column::SpaceId.eq(space_id));
        }
        if let Some(range) = filter.range {
            query = Self::intersecting(query, range);
        }
        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        self.all_ordered(query).await
    }

    /// Lists confirmed reservations of any owner that intersect `range`, ordered by start time.
    pub async fn list_confirmed_in_range(
        &self,
        range: DayRange,
        space_id: Option<i32>,
    ) -> Result<Vec<Reservation>, AppError> {
        let mut query = entity::prelude::Reservation::find()
            .filter(Column::Status.eq(ReservationStatus::Confirmed.as_str()));
        query = Self::intersecting(query, range);

        if let Some(space_id) = space_id {
            query = query.filter(Column::SpaceId.eq(space_id));
        }

        self.all_ordered(query).await
    }

    /// Overwrites the mutable columns of a reservation. Ownership never changes.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - The updated reservation
    /// - `Ok(None)` - No reservation with that ID
    pub async fn update(
        &self,
        id: i32,
        changes: ReservationChanges,
    ) -> Result<Option<Reservation>, AppError> {
        let Some(existing) = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.space_id = ActiveValue::Set(changes.space_id);
        active.title = ActiveValue::Set(changes.title);
        active.description = ActiveValue::Set(changes.description);
        active.start_time = ActiveValue::Set(changes.window.start());
        active.end_time = ActiveValue::Set(changes.window.end());
        active.status = ActiveValue::Set(changes.status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Reservation::from_entity(entity)?))
    }

    /// Writes only the columns set in `edit`, leaving space, window and anything not supplied
    /// as currently stored.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - The reservation as stored after the write
    /// - `Ok(None)` - No reservation with that ID
    pub async fn edit(
        &self,
        id: i32,
        edit: ReservationEdit,
    ) -> Result<Option<Reservation>, AppError> {
        let mut active = entity::reservation::ActiveModel {
            id: ActiveValue::Unchanged(id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        if let Some(title) = edit.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = edit.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(status) = edit.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }

        match active.update(self.db).await {
            Ok(entity) => Ok(Some(Reservation::from_entity(entity)?)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Hard-deletes a reservation.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn intersecting(
        query: Select<entity::prelude::Reservation>,
        range: DayRange,
    ) -> Select<entity::prelude::Reservation> {
        query
            .filter(Column::StartTime.lt(range.end))
            .filter(Column::EndTime.gt(range.start))
    }

    async fn all_ordered(
        &self,
        query: Select<entity::prelude::Reservation>,
    ) -> Result<Vec<Reservation>, AppError> {
        query
            .order_by_asc(Column::StartTime)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect()
    }
}
