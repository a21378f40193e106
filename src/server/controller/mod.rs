//! HTTP handlers.
//!
//! Each handler authenticates through `AuthGuard`, validates the payload, converts DTOs to
//! parameter models, calls a service and converts the result back into a DTO.

pub mod auth;
pub mod reservation;
pub mod space;
pub mod user;

#[cfg(test)]
mod test;
