use sea_orm::DbErr;

/// Errors that can occur while preparing a test context.
#[derive(Debug, thiserror::Error)]
pub enum TestError {
    /// Connecting to the in-memory database or creating a table failed.
    #[error(transparent)]
    Database(#[from] DbErr),
}
