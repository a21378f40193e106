//! Reservation service.
//!
//! Orchestrates reservation writes: request rules, ownership, the space-active check and
//! the overlap check. Every write that can leave a reservation confirmed re-reads it, runs
//! its checks and writes inside one database transaction while holding the target space's
//! lock, so at most one confirmed reservation can ever hold a given space at a given
//! instant. Other edits only write the columns they were given.

pub mod lock;
pub mod overlap;

use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, IsolationLevel,
    TransactionTrait,
};
use std::collections::{HashMap, HashSet};

use crate::server::{
    data::{reservation::ReservationRepository, space::SpaceRepository, user::UserRepository},
    error::{
        auth::AuthError, reservation::ReservationError, validation::ValidationError, AppError,
    },
    model::{
        auth::Identity,
        reservation::{
            CreateReservationParam, NewReservationRecord, Reservation, ReservationChanges,
            ReservationDetails, ReservationEdit, ReservationFilter, ReservationStatus, TimeWindow,
            UpdateReservationParam,
        },
        space::Space,
    },
    service::clock::Clock,
    util::time::DayRange,
};

use self::{
    lock::SpaceLocks,
    overlap::{Admissibility, OverlapChecker},
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a SpaceLocks,
    clock: &'a dyn Clock,
}

impl<'a> ReservationService<'a> {
    /// Creates a new ReservationService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `locks` - Process-wide per-space locks shared by every request
    /// - `clock` - Time source for the "start in the future" rule
    pub fn new(db: &'a DatabaseConnection, locks: &'a SpaceLocks, clock: &'a dyn Clock) -> Self {
        Self { db, locks, clock }
    }

    /// Books a space for the requester.
    ///
    /// The new reservation is confirmed immediately and owned by `requester`.
    ///
    /// # Returns
    /// - `Ok(ReservationDetails)` - Created reservation with space and owner expanded
    /// - `Err(AppError::ValidationErr)` - End not after start, or start not in the future
    /// - `Err(AppError::NotFound)` - Space does not exist
    /// - `Err(AppError::ReservationErr(SpaceUnavailable))` - Space is inactive
    /// - `Err(AppError::ReservationErr(SchedulingConflict))` - Window overlaps a confirmed reservation
    pub async fn create(
        &self,
        requester: &Identity,
        param: CreateReservationParam,
    ) -> Result<ReservationDetails, AppError> {
        let window = TimeWindow::new(param.start_time, param.end_time)?;
        if window.start() <= self.clock.now() {
            return Err(ValidationError::field(
                "start_time",
                "The start time must be a date after now.",
            )
            .into());
        }

        let space_not_found = || AppError::NotFound("Space not found".to_string());

        // Locks are only taken for spaces that exist.
        SpaceRepository::new(self.db)
            .find_by_id(param.space_id)
            .await?
            .ok_or_else(space_not_found)?;

        let reservation = {
            let _guard = self.locks.acquire(param.space_id).await;
            let txn = self.begin().await?;

            let space = SpaceRepository::new(&txn)
                .find_by_id(param.space_id)
                .await?
                .ok_or_else(space_not_found)?;

            Self::ensure_admissible(&txn, &space, window, None).await?;

            let reservation = ReservationRepository::new(&txn)
                .create(NewReservationRecord {
                    user_id: requester.user_id,
                    space_id: space.id,
                    title: param.title,
                    description: param.description,
                    window,
                    status: ReservationStatus::Confirmed,
                })
                .await?;

            txn.commit().await?;
            reservation
        };

        tracing::info!(
            reservation_id = reservation.id,
            space_id = reservation.space_id,
            user_id = reservation.user_id,
            "Reservation created"
        );

        self.details_of(reservation).await
    }

    /// Gets a reservation the requester owns, or any reservation for admins.
    pub async fn get(&self, requester: &Identity, id: i32) -> Result<ReservationDetails, AppError> {
        let reservation = self.find(id).await?;
        Self::authorize(requester, &reservation)?;

        self.details_of(reservation).await
    }

    /// Applies a partial update.
    ///
    /// When the space or a time bound is supplied, or the update confirms a reservation that
    /// was not confirmed, the target space must exist and be active and the merged window
    /// must not overlap another confirmed reservation on it.
    ///
    /// Updates that may leave the reservation confirmed merge against a copy re-read under
    /// the target space's lock. Anything else writes only the supplied columns, so it cannot
    /// restore a window or status that a concurrent request changed.
    ///
    /// # Returns
    /// - `Ok(ReservationDetails)` - Updated reservation with space and owner expanded
    /// - `Err(AppError::NotFound)` - Reservation does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Requester is neither owner nor admin
    /// - `Err(AppError::ValidationErr)` - Merged window is empty or target space is unknown
    /// - `Err(AppError::ReservationErr(_))` - Target space inactive or window conflicts
    pub async fn update(
        &self,
        requester: &Identity,
        id: i32,
        param: UpdateReservationParam,
    ) -> Result<ReservationDetails, AppError> {
        let existing = self.find(id).await?;
        Self::authorize(requester, &existing)?;

        let reschedules =
            param.space_id.is_some() || param.start_time.is_some() || param.end_time.is_some();
        let confirms = param.status == Some(ReservationStatus::Confirmed);

        let updated = if reschedules || confirms {
            self.update_locked(id, existing.space_id, &param, reschedules)
                .await?
        } else {
            ReservationRepository::new(self.db)
                .edit(
                    id,
                    ReservationEdit {
                        title: param.title,
                        description: param.description,
                        status: param.status,
                    },
                )
                .await?
        };

        let updated =
            updated.ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        tracing::info!(
            reservation_id = updated.id,
            space_id = updated.space_id,
            status = updated.status.as_str(),
            "Reservation updated"
        );

        self.details_of(updated).await
    }

    /// Hard-deletes a reservation the requester owns, or any reservation for admins.
    pub async fn delete(&self, requester: &Identity, id: i32) -> Result<(), AppError> {
        let reservation = self.find(id).await?;
        Self::authorize(requester, &reservation)?;

        if !ReservationRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Reservation not found".to_string()));
        }

        tracing::info!(
            reservation_id = id,
            requester_id = requester.user_id,
            "Reservation deleted"
        );

        Ok(())
    }

    /// Lists the requester's own reservations ordered by start time.
    pub async fn list(
        &self,
        requester: &Identity,
        filter: ReservationFilter,
    ) -> Result<Vec<ReservationDetails>, AppError> {
        let reservations = ReservationRepository::new(self.db)
            .list_for_user(requester.user_id, filter)
            .await?;

        self.expand(reservations).await
    }

    /// Lists confirmed reservations of every user that intersect `range`.
    ///
    /// # Returns
    /// - `Ok(Vec<ReservationDetails>)` - Matching reservations ordered by start time
    /// - `Err(AppError::ValidationErr)` - `space_id` was given but does not exist
    pub async fn calendar(
        &self,
        range: DayRange,
        space_id: Option<i32>,
    ) -> Result<Vec<ReservationDetails>, AppError> {
        if let Some(space_id) = space_id {
            if SpaceRepository::new(self.db).find_by_id(space_id).await?.is_none() {
                return Err(
                    ValidationError::field("space_id", "The selected space id is invalid.").into(),
                );
            }
        }

        let reservations = ReservationRepository::new(self.db)
            .list_confirmed_in_range(range, space_id)
            .await?;

        self.expand(reservations).await
    }

    /// Merges `param` into the reservation as stored while the target space is locked.
    ///
    /// `stored_space_id` is only a hint for which lock to take when the space is not being
    /// changed; if the reservation moved while waiting, the lock for its new space is taken
    /// instead.
    async fn update_locked(
        &self,
        id: i32,
        mut stored_space_id: i32,
        param: &UpdateReservationParam,
        reschedules: bool,
    ) -> Result<Option<Reservation>, AppError> {
        let invalid_space =
            || ValidationError::field("space_id", "The selected space id is invalid.");

        // Locks are only taken for spaces that exist.
        if let Some(space_id) = param.space_id {
            SpaceRepository::new(self.db)
                .find_by_id(space_id)
                .await?
                .ok_or_else(invalid_space)?;
        }

        loop {
            let target = param.space_id.unwrap_or(stored_space_id);
            let _guard = self.locks.acquire(target).await;
            let txn = self.begin().await?;

            let Some(current) = ReservationRepository::new(&txn).find_by_id(id).await? else {
                return Ok(None);
            };
            if param.space_id.is_none() && current.space_id != target {
                txn.rollback().await?;
                stored_space_id = current.space_id;
                continue;
            }

            let status = param.status.unwrap_or(current.status);
            let activates = status == ReservationStatus::Confirmed
                && current.status != ReservationStatus::Confirmed;

            let changes = ReservationChanges {
                space_id: target,
                title: param.title.clone().unwrap_or(current.title),
                description: param.description.clone().unwrap_or(current.description),
                window: TimeWindow::new(
                    param.start_time.unwrap_or(current.start_time),
                    param.end_time.unwrap_or(current.end_time),
                )?,
                status,
            };

            if reschedules || activates {
                let space = SpaceRepository::new(&txn)
                    .find_by_id(target)
                    .await?
                    .ok_or_else(invalid_space)?;

                Self::ensure_admissible(&txn, &space, changes.window, Some(id)).await?;
            }

            let updated = ReservationRepository::new(&txn).update(id, changes).await?;
            txn.commit().await?;

            return Ok(updated);
        }
    }

    /// Starts the transaction that wraps a check-then-write sequence.
    ///
    /// Postgres runs it SERIALIZABLE; SQLite transactions are already serialised by its
    /// single writer.
    async fn begin(&self) -> Result<DatabaseTransaction, AppError> {
        let isolation = match self.db.get_database_backend() {
            DbBackend::Postgres => Some(IsolationLevel::Serializable),
            _ => None,
        };

        Ok(self.db.begin_with_config(isolation, None).await?)
    }

    async fn ensure_admissible<C: ConnectionTrait>(
        db: &C,
        space: &Space,
        window: TimeWindow,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        if !space.is_active {
            tracing::debug!(space_id = space.id, "Rejected booking on inactive space");
            return Err(ReservationError::SpaceUnavailable(space.id).into());
        }

        match OverlapChecker::new(db).check(space.id, window, exclude_id).await? {
            Admissibility::Admissible => Ok(()),
            Admissibility::Rejected(conflicting) => {
                tracing::debug!(
                    space_id = space.id,
                    conflicting_id = conflicting.id,
                    "Rejected overlapping booking"
                );
                Err(ReservationError::SchedulingConflict(conflicting).into())
            }
        }
    }

    fn authorize(requester: &Identity, reservation: &Reservation) -> Result<(), AppError> {
        if requester.can_act_for(reservation.user_id) {
            return Ok(());
        }

        Err(AuthError::AccessDenied(
            requester.user_id,
            format!(
                "reservation {} belongs to user {}",
                reservation.id, reservation.user_id
            ),
        )
        .into())
    }

    async fn find(&self, id: i32) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
    }

    async fn details_of(&self, reservation: Reservation) -> Result<ReservationDetails, AppError> {
        let space = SpaceRepository::new(self.db)
            .find_by_id(reservation.space_id)
            .await?;
        let user = UserRepository::new(self.db)
            .find_by_id(reservation.user_id)
            .await?;

        Ok(ReservationDetails {
            reservation,
            space,
            user,
        })
    }

    /// Attaches spaces and owners with one query per table.
    async fn expand(
        &self,
        reservations: Vec<Reservation>,
    ) -> Result<Vec<ReservationDetails>, AppError> {
        let space_ids: HashSet<i32> = reservations.iter().map(|r| r.space_id).collect();
        let user_ids: HashSet<i32> = reservations.iter().map(|r| r.user_id).collect();

        let spaces: HashMap<i32, Space> = SpaceRepository::new(self.db)
            .find_by_ids(space_ids.into_iter().collect())
            .await?
            .into_iter()
            .map(|space| (space.id, space))
            .collect();
        let users: HashMap<i32, _> = UserRepository::new(self.db)
            .find_by_ids(user_ids.into_iter().collect())
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        Ok(reservations
            .into_iter()
            .map(|reservation| ReservationDetails {
                space: spaces.get(&reservation.space_id).cloned(),
                user: users.get(&reservation.user_id).cloned(),
                reservation,
            })
            .collect())
    }
}
