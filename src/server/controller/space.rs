use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use garde::Validate;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        space::{CreateSpaceDto, SpaceDto, SpaceListQuery, UpdateSpaceDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::space::{CreateSpaceParam, SpaceFilter, UpdateSpaceParam},
        service::space::SpaceService,
        state::AppState,
    },
};

/// Tag for grouping space endpoints in OpenAPI documentation
pub static SPACE_TAG: &str = "space";

/// List spaces, optionally filtered by `is_active`.
#[utoipa::path(
    get,
    path = "/api/spaces",
    tag = SPACE_TAG,
    params(SpaceListQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Spaces ordered by ID", body = Vec<SpaceDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_spaces(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SpaceListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.verifier.as_ref(), &headers)
        .require(&[])
        .await?;

    let spaces = SpaceService::new(&state.db)
        .list(SpaceFilter::from(query))
        .await?;

    let dtos: Vec<SpaceDto> = spaces.into_iter().map(|space| space.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single space.
#[utoipa::path(
    get,
    path = "/api/spaces/{id}",
    tag = SPACE_TAG,
    params(("id" = i32, Path, description = "Space ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The space", body = SpaceDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Space not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_space(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.verifier.as_ref(), &headers)
        .require(&[])
        .await?;

    let space = SpaceService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(space.into_dto())))
}

/// Create a space.
///
/// # Access Control
/// - `Admin` - Only admins manage the catalog
#[utoipa::path(
    post,
    path = "/api/spaces",
    tag = SPACE_TAG,
    request_body = CreateSpaceDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Space created", body = SpaceDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 422, description = "Invalid space data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_space(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateSpaceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.verifier.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let space = SpaceService::new(&state.db)
        .create(CreateSpaceParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(space.into_dto())))
}

/// Update a space. Deactivating it blocks new bookings but keeps existing ones.
///
/// # Access Control
/// - `Admin` - Only admins manage the catalog
#[utoipa::path(
    put,
    path = "/api/spaces/{id}",
    tag = SPACE_TAG,
    params(("id" = i32, Path, description = "Space ID")),
    request_body = UpdateSpaceDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated space", body = SpaceDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Space not found", body = ErrorDto),
        (status = 422, description = "Invalid space data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_space(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSpaceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.verifier.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let space = SpaceService::new(&state.db)
        .update(id, UpdateSpaceParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(space.into_dto())))
}

/// Delete a space and all of its reservations.
///
/// # Access Control
/// - `Admin` - Only admins manage the catalog
#[utoipa::path(
    delete,
    path = "/api/spaces/{id}",
    tag = SPACE_TAG,
    params(("id" = i32, Path, description = "Space ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Space and its reservations deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Space not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_space(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.verifier.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    SpaceService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
