use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored reservation status is not one of the known states.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown reservation status '{0}' stored for reservation {1}")]
    UnknownReservationStatus(String, i32),

    /// A stored user role is not one of the known roles.
    #[error("Unknown role '{0}' stored for user {1}")]
    UnknownRole(String, i32),

    /// Hashing a password with argon2 failed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Adding the token lifetime to the current time left chrono's supported range.
    #[error("Access token expiry overflows for user {0}")]
    TokenExpiryOverflow(i32),
}
