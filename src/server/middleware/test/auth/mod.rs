use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AccessTokenVerifier, AuthGuard, Permission},
    model::user::Role,
    service::clock::FixedClock,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;
use test_utils::{builder::TestBuilder, factory};


fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
