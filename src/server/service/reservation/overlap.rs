//! Overlap checker.
//!
//! Decides whether a candidate window may be booked on a space given the confirmed
//! reservations already stored for it. Two windows conflict iff
//! `candidate.start < existing.end AND candidate.end > existing.start`, so partial overlap,
//! containment in either direction and exact duplicates conflict while back-to-back
//! windows do not.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::reservation::ReservationRepository,
    error::AppError,
    model::reservation::{Reservation, TimeWindow},
};

/// Outcome of an overlap check.
#[derive(Debug, Clone, PartialEq)]
pub enum Admissibility {
    Admissible,
    /// Carries the first conflicting confirmed reservation in start-time order.
    Rejected(Box<Reservation>),
}

pub struct OverlapChecker<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OverlapChecker<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Evaluates `window` on `space_id`, ignoring `exclude_id` when a reservation is moved.
    pub async fn check(
        &self,
        space_id: i32,
        window: TimeWindow,
        exclude_id: Option<i32>,
    ) -> Result<Admissibility, AppError> {
        let conflict = ReservationRepository::new(self.db)
            .find_confirmed_overlapping(space_id, window, exclude_id)
            .await?;

        Ok(match conflict {
            Some(existing) => {
                debug_assert!(
                    TimeWindow::new(existing.start_time, existing.end_time)
                        .is_ok_and(|stored| stored.overlaps(&window)),
                    "query returned reservation {} that does not overlap the candidate",
                    existing.id
                );
                Admissibility::Rejected(Box::new(existing))
            }
            None => Admissibility::Admissible,
        })
    }
}
