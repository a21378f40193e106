pub use super::access_token::Entity as AccessToken;
pub use super::reservation::Entity as Reservation;
pub use super::space::Entity as Space;
pub use super::user::Entity as User;
