//! Wire DTOs exchanged with API clients.
//!
//! Every type here is a plain serde struct with an OpenAPI schema. Domain logic never
//! lives here; the server converts between these DTOs and its domain models.

pub mod api;
pub mod auth;
pub mod reservation;
pub mod space;
pub mod user;
