use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use garde::Validate;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        auth::{LoginDto, RegisterDto, TokenDto},
        user::UserDto,
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        model::user::CreateUserParam,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

fn service(state: &AppState) -> AuthService<'_> {
    AuthService::new(&state.db, state.clock.as_ref(), state.token_ttl)
}

/// Register a new account and sign it in.
///
/// Self-registered accounts always get the `user` role.
///
/// # Returns
/// - `201 Created` - Bearer token and the new account
/// - `422 Unprocessable Entity` - Invalid data or email already taken
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and signed in", body = TokenDto),
        (status = 422, description = "Invalid registration data or email already taken", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let issued = service(&state)
        .register(CreateUserParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(issued.into_dto())))
}

/// Exchange email and password for a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 422, description = "Malformed credentials", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let issued = service(&state)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(issued.into_dto())))
}

/// Revoke the bearer token used for this request.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Token revoked"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(state.verifier.as_ref(), &headers);
    let _ = guard.require(&[]).await?;
    let token = guard.token().ok_or(AuthError::MissingToken)?;

    service(&state).logout(token).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the account behind the bearer token.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The signed-in user", body = UserDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(state.verifier.as_ref(), &headers)
        .require(&[])
        .await?;

    let user = service(&state).me(&identity).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
