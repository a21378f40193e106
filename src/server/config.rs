use chrono::TimeDelta;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_ACCESS_TOKEN_TTL_HOURS: i64 = 24;
/// One year.
const MAX_ACCESS_TOKEN_TTL_HOURS: i64 = 24 * 365;

/// Credentials for the account created when the database has no admin yet.
pub struct BootstrapAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub access_token_ttl: TimeDelta,
    /// Single allowed origin; any origin is allowed when unset.
    pub cors_allowed_origin: Option<String>,
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let access_token_ttl = parse_ttl_hours(
            "ACCESS_TOKEN_TTL_HOURS",
            optional_var("ACCESS_TOKEN_TTL_HOURS")
                .as_deref()
                .unwrap_or(&DEFAULT_ACCESS_TOKEN_TTL_HOURS.to_string()),
        )?;

        let bootstrap_admin = match (optional_var("ADMIN_EMAIL"), optional_var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(BootstrapAdmin {
                name: optional_var("ADMIN_NAME").unwrap_or_else(|| "Administrator".to_string()),
                email,
                password,
            }),
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()).into())
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("ADMIN_EMAIL".to_string()).into())
            }
            (None, None) => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: optional_var("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            access_token_ttl,
            cors_allowed_origin: optional_var("CORS_ALLOWED_ORIGIN"),
            bootstrap_admin,
        })
    }
}

/// Reads a variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Parses a token lifetime between one hour and `MAX_ACCESS_TOKEN_TTL_HOURS`.
fn parse_ttl_hours(name: &str, value: &str) -> Result<TimeDelta, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason,
    };

    let hours = value
        .trim()
        .parse::<i64>()
        .map_err(|e| invalid(e.to_string()))?;

    if !(1..=MAX_ACCESS_TOKEN_TTL_HOURS).contains(&hours) {
        return Err(invalid(format!(
            "must be between 1 and {MAX_ACCESS_TOKEN_TTL_HOURS} hours"
        )));
    }

    TimeDelta::try_hours(hours).ok_or_else(|| invalid("out of range".to_string()))
}
