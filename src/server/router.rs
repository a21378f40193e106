use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth::*, reservation::*, space::*, user::*},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Spacebook API", description = "Space reservation backend"),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token management"),
        (name = "user", description = "User account management"),
        (name = "space", description = "Bookable space catalog"),
        (name = "reservation", description = "Reservations and the shared calendar")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::new);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

/// Builds the API router with OpenAPI documentation served under `/api/docs`.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(register))
        .routes(routes!(login))
        .routes(routes!(logout))
        .routes(routes!(me))
        .routes(routes!(list_users, create_user))
        .routes(routes!(get_user, update_user, delete_user))
        .routes(routes!(list_spaces, create_space))
        .routes(routes!(get_space, update_space, delete_space))
        .routes(routes!(list_reservations, create_reservation))
        .routes(routes!(reservation_calendar))
        .routes(routes!(get_reservation, update_reservation, delete_reservation))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
