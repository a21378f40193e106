//! Domain & parameter models for reservations
//!
//! Defines the reservation domain model, its status lifecycle, the half-open booking
//! window used by the overlap rules, and the parameter models passed from controllers
//! to the reservation service.

use chrono::{DateTime, Utc};

use crate::{
    model::reservation::{
        CalendarQuery, CreateReservationDto, ReservationDto, ReservationListQuery,
        UpdateReservationDto,
    },
    server::{
        error::{
            internal::InternalError,
            validation::{FieldError, ValidationError},
            AppError,
        },
        model::{space::Space, user::User},
        util::{
            parse::{parse_date, parse_instant},
            time::DayRange,
        },
    },
};

/// Lifecycle state of a reservation. Only `Confirmed` reservations occupy their space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(ReservationStatus::Pending),
            "confirmed" => Some(ReservationStatus::Confirmed),
            "cancelled" => Some(ReservationStatus::Cancelled),
            _ => None,
        }
    }

    /// Parses a status submitted in a request, reporting failures against `status`.
    pub fn from_request(value: &str) -> Result<Self, ValidationError> {
        Self::parse(value)
            .ok_or_else(|| ValidationError::field("status", "The selected status is invalid."))
    }
}

/// Half-open booking interval `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// # Returns
    /// - `Ok(TimeWindow)` - `end` is strictly after `start`
    /// - `Err(ValidationError)` - Empty or inverted window, reported against `end_time`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if end <= start {
            return Err(ValidationError::field(
                "end_time",
                "The end time must be a date after start time.",
            ));
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Windows that merely touch at a boundary do not overlap.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The reservation domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub user_id: i32,
    pub space_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Converts an entity model to the reservation domain model
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownReservationStatus))` - Stored status is not recognised
    pub fn from_entity(entity: entity::reservation::Model) -> Result<Self, AppError> {
        let status = ReservationStatus::parse(&entity.status).ok_or_else(|| {
            InternalError::UnknownReservationStatus(entity.status.clone(), entity.id)
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            space_id: entity.space_id,
            title: entity.title,
            description: entity.description,
            start_time: entity.start_time,
            end_time: entity.end_time,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            user_id: self.user_id,
            space_id: self.space_id,
            title: self.title,
            description: self.description,
            start_time: self.start_time,
            end_time: self.end_time,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            space: None,
            user: None,
        }
    }
}

/// A reservation with its space and owner expanded for responses.
#[derive(Debug, Clone)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub space: Option<Space>,
    pub user: Option<User>,
}

impl ReservationDetails {
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            space: self.space.map(Space::into_dto),
            user: self.user.map(User::into_dto),
            ..self.reservation.into_dto()
        }
    }
}

/// Parameters for creating a reservation; the owner is the requesting identity.
#[derive(Debug, Clone)]
pub struct CreateReservationParam {
    pub space_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateReservationParam {
    pub space_id: Option<i32>,
    pub title: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: Option<ReservationStatus>,
}

/// Column values written by the repository when inserting a reservation.
#[derive(Debug, Clone)]
pub struct NewReservationRecord {
    pub user_id: i32,
    pub space_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub window: TimeWindow,
    pub status: ReservationStatus,
}

/// Fully merged values written back on update.
#[derive(Debug, Clone)]
pub struct ReservationChanges {
    pub space_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub window: TimeWindow,
    pub status: ReservationStatus,
}

/// Columns an update may write without changing which space and window the reservation
/// holds. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct ReservationEdit {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<ReservationStatus>,
}

/// Filters for a user's own reservation list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReservationFilter {
    pub space_id: Option<i32>,
    pub range: Option<DayRange>,
    pub status: Option<ReservationStatus>,
}

impl TryFrom<CreateReservationDto> for CreateReservationParam {
    type Error = ValidationError;

    fn try_from(dto: CreateReservationDto) -> Result<Self, Self::Error> {
        Ok(Self {
            space_id: dto.space_id,
            title: dto.title,
            description: dto.description,
            start_time: parse_instant("start_time", &dto.start_time)?,
            end_time: parse_instant("end_time", &dto.end_time)?,
        })
    }
}

impl TryFrom<UpdateReservationDto> for UpdateReservationParam {
    type Error = ValidationError;

    fn try_from(dto: UpdateReservationDto) -> Result<Self, Self::Error> {
        Ok(Self {
            space_id: dto.space_id,
            title: dto.title,
            description: dto.description,
            start_time: dto
                .start_time
                .map(|value| parse_instant("start_time", &value))
                .transpose()?,
            end_time: dto
                .end_time
                .map(|value| parse_instant("end_time", &value))
                .transpose()?,
            status: dto
                .status
                .map(|value| ReservationStatus::from_request(&value))
                .transpose()?,
        })
    }
}

impl TryFrom<ReservationListQuery> for ReservationFilter {
    type Error = ValidationError;

    /// The date range only applies when both `start_date` and `end_date` are present.
    fn try_from(query: ReservationListQuery) -> Result<Self, Self::Error> {
        let range = match (query.start_date, query.end_date) {
            (Some(start_date), Some(end_date)) => Some(DayRange::from_dates(
                parse_date("start_date", &start_date)?,
                parse_date("end_date", &end_date)?,
            )),
            _ => None,
        };

        Ok(Self {
            space_id: query.space_id,
            range,
            status: query
                .status
                .map(|value| ReservationStatus::from_request(&value))
                .transpose()?,
        })
    }
}

/// Parsed calendar request.
#[derive(Debug, Clone, Copy)]
pub struct CalendarParam {
    pub range: DayRange,
    pub space_id: Option<i32>,
}

impl TryFrom<CalendarQuery> for CalendarParam {
    type Error = ValidationError;

    /// Both dates are required and `end_date` may not precede `start_date`.
    fn try_from(query: CalendarQuery) -> Result<Self, Self::Error> {
        let mut fields = Vec::new();

        let start_date = match query.start_date.as_deref() {
            Some(value) => collect(parse_date("start_date", value), &mut fields),
            None => {
                fields.push(required("start_date"));
                None
            }
        };
        let end_date = match query.end_date.as_deref() {
            Some(value) => collect(parse_date("end_date", value), &mut fields),
            None => {
                fields.push(required("end_date"));
                None
            }
        };

        match (start_date, end_date) {
            (Some(start_date), Some(end_date)) if end_date >= start_date => Ok(Self {
                range: DayRange::from_dates(start_date, end_date),
                space_id: query.space_id,
            }),
            (Some(_), Some(_)) => Err(ValidationError::field(
                "end_date",
                "The end date must be a date after or equal to start date.",
            )),
            _ => Err(ValidationError { fields }),
        }
    }
}

fn collect<T>(result: Result<T, ValidationError>, fields: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            fields.extend(err.fields);
            None
        }
    }
}

fn required(field: &str) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: format!("The {} field is required.", field.replace('_', " ")),
    }
}
