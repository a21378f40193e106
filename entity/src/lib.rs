//! SeaORM entity models for the reservation backend.

pub mod prelude;

pub mod access_token;
pub mod reservation;
pub mod space;
pub mod user;
