//! OpenAPI document for the v1 surface, served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Registers the `bearer_auth` (JWT) scheme referenced by the global `security`.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("`Authorization: Bearer <access token>`"))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "hello-identity", description = "Bearer-authenticated identity and time-range API"),
    security(("bearer_auth" = [])),
    paths(
        crate::api::v1::handlers::health::health,
        crate::api::v1::handlers::me::get_me,
        crate::api::v1::handlers::time_ranges::time_range_status,
    ),
    components(schemas(
        crate::api::v1::dto::users::UserResponse,
        crate::api::v1::dto::time_ranges::TimeRangeStatusResponse,
        crate::domain::TimeRangeStatus,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness"),
        (name = "identity", description = "Authenticated user resolution"),
        (name = "time-ranges", description = "Closed date-time interval checks"),
    )
)]
pub struct ApiDoc;

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_v1_paths() {
        let spec = ApiDoc::openapi();
        for path in [
            "/api/v1/health",
            "/api/v1/me",
            "/api/v1/time-ranges/status",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn spec_declares_bearer_scheme() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
