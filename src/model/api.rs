use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::reservation::ReservationDto;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    pub error: String,
}

/// A single failed validation rule.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Body returned with 422 Unprocessable Entity.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ValidationErrorDto {
    pub error: String,
    pub fields: Vec<FieldErrorDto>,
}

/// Body returned when a booking collides with a confirmed reservation.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ConflictErrorDto {
    pub error: String,
    pub conflicting_reservation: ReservationDto,
}
