use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::user::UserService,
};

/// Connects to the database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer for the API.
///
/// Allows the configured origin only, or any origin when none is configured. Bearer tokens
/// travel in the `Authorization` header, so no credentials mode is needed.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer ready to wrap the router
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - Configured origin is not a valid header value
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    let Some(origin) = &config.cors_allowed_origin else {
        return Ok(cors.allow_origin(Any));
    };

    let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
        name: "CORS_ALLOWED_ORIGIN".to_string(),
        reason: e.to_string(),
    })?;

    Ok(cors.allow_origin(origin))
}

/// Ensures the service can be administered.
///
/// Creates or promotes the configured bootstrap admin when no admin exists. Without a
/// configured admin, only a warning is logged.
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    let Some(admin) = &config.bootstrap_admin else {
        if !UserRepository::new(db).admin_exists().await? {
            tracing::warn!(
                "No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one"
            );
        }
        return Ok(());
    };

    if let Some(user) = UserService::new(db)
        .ensure_admin(&admin.name, &admin.email, &admin.password)
        .await?
    {
        tracing::info!(user_id = user.id, email = %user.email, "Bootstrap admin ready");
    }

    Ok(())
}
