//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let space = factory::create_space(&db).await?;
//! let reservation = factory::reservation::ReservationFactory::new(&db, user.id, space.id)
//!     .window(start, end)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities, optionally with a hashed password
//! - `space` - Create space entities
//! - `reservation` - Create reservation entities
//! - `access_token` - Create bearer token rows for a user
//! - `helpers` - Shared id counter and multi-entity helpers

pub mod access_token;
pub mod helpers;
pub mod reservation;
pub mod space;
pub mod user;

pub use access_token::create_access_token;
pub use reservation::create_reservation;
pub use space::create_space;
pub use user::{create_admin, create_user};
