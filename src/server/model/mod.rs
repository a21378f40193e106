//! Domain models and operation parameter types.
//!
//! Domain models are built from entity models by the data layer and converted into DTOs by
//! controllers. Parameter types carry already-parsed input from controllers to services.

pub mod auth;
pub mod reservation;
pub mod space;
pub mod user;
