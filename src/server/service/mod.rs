//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing reservation, catalog and account rules
//! - **Authorization**: Ownership checks based on the requesting identity
//! - **Transaction Management**: Running check-then-write sequences atomically

pub mod auth;
pub mod clock;
pub mod reservation;
pub mod space;
pub mod user;
