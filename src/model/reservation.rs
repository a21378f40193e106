use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{space::SpaceDto, user::UserDto};

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct ReservationDto {
    pub id: i32,
    pub user_id: i32,
    pub space_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// `pending`, `confirmed` or `cancelled`
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub space: Option<SpaceDto>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user: Option<UserDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug)]
pub struct CreateReservationDto {
    #[garde(skip)]
    pub space_id: i32,
    #[garde(length(min = 1, max = 255))]
    pub title: String,
    #[garde(skip)]
    pub description: Option<String>,
    /// RFC 3339 or `YYYY-MM-DD HH:MM[:SS]` in UTC
    #[garde(length(min = 1))]
    pub start_time: String,
    /// RFC 3339 or `YYYY-MM-DD HH:MM[:SS]` in UTC
    #[garde(length(min = 1))]
    pub end_time: String,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug, Default)]
pub struct UpdateReservationDto {
    #[garde(skip)]
    pub space_id: Option<i32>,
    #[garde(length(min = 1, max = 255))]
    pub title: Option<String>,
    /// Omit to keep the stored description, send `null` to clear it
    #[garde(skip)]
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[garde(length(min = 1))]
    pub start_time: Option<String>,
    #[garde(length(min = 1))]
    pub end_time: Option<String>,
    #[garde(skip)]
    pub status: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct ReservationListQuery {
    pub space_id: Option<i32>,
    /// `YYYY-MM-DD`; only applied together with `end_date`
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`; only applied together with `start_date`
    pub end_date: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct CalendarQuery {
    /// `YYYY-MM-DD`, required
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`, required, not before `start_date`
    pub end_date: Option<String>,
    pub space_id: Option<i32>,
}

/// Maps a present field, `null` included, to `Some` so it can be told apart from an
/// omitted one.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
