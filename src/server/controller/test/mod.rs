use crate::server::{router::router, service::clock::FixedClock, state::AppState};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;


fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
}

fn app(db: &DatabaseConnection) -> Router {
    let state = AppState::with_clock(
        db.clone(),
        Duration::hours(24),
        Arc::new(FixedClock(now())),
    );

    router(state, CorsLayer::new())
}

/// Stores a token for `user_id` that is valid at `now()`.
async fn token_for(db: &DatabaseConnection, user_id: i32) -> String {
    factory::access_token::AccessTokenFactory::new(db, user_id)
        .expires_at(now() + Duration::hours(1))
        .build()
        .await
        .unwrap()
        .token
}

/// Sends a request and returns the status with the parsed JSON body (`Null` when empty).
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

fn field_names(body: &Value) -> Vec<String> {
    body["fields"]
        .as_array()
        .map(|fields| {
            fields
                .iter()
                .filter_map(|f| f["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
