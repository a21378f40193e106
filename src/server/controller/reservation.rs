use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use garde::Validate;

use crate::{
    model::{
        api::{ConflictErrorDto, ErrorDto, ValidationErrorDto},
        reservation::{
            CalendarQuery, CreateReservationDto, ReservationDto, ReservationListQuery,
            UpdateReservationDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::reservation::{
            CalendarParam, CreateReservationParam, ReservationFilter, UpdateReservationParam,
        },
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

fn service(state: &AppState) -> ReservationService<'_> {
    ReservationService::new(&state.db, &state.space_locks, state.clock.as_ref())
}

/// Book a space.
///
/// Creates a confirmed reservation owned by the caller. The space must exist and be
/// active, the window must start in the future, and it may not overlap any confirmed
/// reservation on the same space. Touching windows are allowed.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database, space locks and clock
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Space, title, optional description and the booking window
///
/// # Returns
/// - `201 Created` - Reservation with space and owner expanded
/// - `400 Bad Request` - Space inactive, or overlap with the conflicting reservation in the body
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Space does not exist
/// - `422 Unprocessable Entity` - Invalid fields or window
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Reservation confirmed", body = ReservationDto),
        (status = 400, description = "Space inactive or window overlaps a confirmed reservation", body = ConflictErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Space not found", body = ErrorDto),
        (status = 422, description = "Invalid reservation data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(state.verifier.as_ref(), &headers)
        .require(&[])
        .await?;

    payload.validate()?;
    let param = CreateReservationParam::try_from(payload)?;

    let reservation = service(&state).create(&identity, param).await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// List the caller's reservations.
///
/// Optional filters narrow by space, status, and a `start_date`/`end_date` day range; the
/// range only applies when both dates are given.
///
/// # Access Control
/// - Any authenticated user; only their own reservations are returned
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    params(ReservationListQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's reservations ordered by start time", body = Vec<ReservationDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 422, description = "Invalid filter", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ReservationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(state.verifier.as_ref(), &headers)
        .require(&[])
        .await?;

    let filter = ReservationFilter::try_from(query)?;
    let reservations = service(&state).list(&identity, filter).await?;

    let dtos: Vec<ReservationDto> = reservations
        .into_iter()
        .map(|reservation| reservation.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Shared calendar of confirmed reservations.
///
/// Returns confirmed reservations of every user intersecting the inclusive day range,
/// ordered by start time.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Matching reservations
/// - `401 Unauthorized` - Missing or invalid token
/// - `422 Unprocessable Entity` - Missing or invalid dates, or unknown `space_id`
#[utoipa::path(
    get,
    path = "/api/reservations/calendar",
    tag = RESERVATION_TAG,
    params(CalendarQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Confirmed reservations of all users intersecting the date range", body = Vec<ReservationDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 422, description = "Missing or invalid dates, or unknown space", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reservation_calendar(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CalendarQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.verifier.as_ref(), &headers)
        .require(&[])
        .await?;

    let param = CalendarParam::try_from(query)?;
    let reservations = service(&state)
        .calendar(param.range, param.space_id)
        .await?;

    let dtos: Vec<ReservationDto> = reservations
        .into_iter()
        .map(|reservation| reservation.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single reservation.
///
/// # Access Control
/// - Owner or admin
#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The reservation", body = ReservationDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is neither owner nor admin", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(state.verifier.as_ref(), &headers)
        .require(&[])
        .await?;

    let reservation = service(&state).get(&identity, id).await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Update a reservation.
///
/// Omitted fields keep their stored value. Changing the space or either time bound, or
/// confirming a reservation that was pending or cancelled, re-runs the availability and
/// overlap checks against every other confirmed reservation.
///
/// # Access Control
/// - Owner or admin
///
/// # Returns
/// - `200 OK` - Updated reservation
/// - `400 Bad Request` - Target space inactive or window conflicts
/// - `403 Forbidden` - Caller is neither owner nor admin
/// - `404 Not Found` - Reservation does not exist
/// - `422 Unprocessable Entity` - Invalid fields, empty window or unknown space
#[utoipa::path(
    put,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = UpdateReservationDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated reservation", body = ReservationDto),
        (status = 400, description = "Space inactive or window overlaps a confirmed reservation", body = ConflictErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is neither owner nor admin", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 422, description = "Invalid reservation data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(state.verifier.as_ref(), &headers)
        .require(&[])
        .await?;

    payload.validate()?;
    let param = UpdateReservationParam::try_from(payload)?;

    let reservation = service(&state).update(&identity, id, param).await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Delete a reservation, freeing its slot.
///
/// # Access Control
/// - Owner or admin
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is neither owner nor admin", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(state.verifier.as_ref(), &headers)
        .require(&[])
        .await?;

    service(&state).delete(&identity, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
