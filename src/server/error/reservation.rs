use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ConflictErrorDto, ErrorDto},
    server::model::reservation::Reservation,
};

/// Reasons a reservation write is refused after validation passed.
#[derive(Error, Debug)]
pub enum ReservationError {
    /// Target space exists but does not accept bookings.
    #[error("Space {0} is not available for reservations")]
    SpaceUnavailable(i32),

    /// Candidate interval overlaps a confirmed reservation on the same space.
    ///
    /// Carries the first conflicting record so clients can show what is in the way.
    #[error("Requested window overlaps reservation {}", .0.id)]
    SchedulingConflict(Box<Reservation>),
}

impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        match self {
            Self::SpaceUnavailable(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "The space is not available".to_string(),
                }),
            )
                .into_response(),
            Self::SchedulingConflict(conflicting) => (
                StatusCode::BAD_REQUEST,
                Json(ConflictErrorDto {
                    error: "A confirmed reservation already exists for this space in the requested window"
                        .to_string(),
                    conflicting_reservation: conflicting.into_dto(),
                }),
            )
                .into_response(),
        }
    }
}
