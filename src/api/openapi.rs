use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::routes::{
    AdminLoginRequestDto, AdminLoginResponse, AdminLogoutResponse, AdminSessionResponse,
    GateStatusResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Admin access endpoints for the portfolio content manager"
    ),
    paths(
        crate::modules::auth::adapter::incoming::web::routes::admin_login::admin_login_handler,
        crate::modules::auth::adapter::incoming::web::routes::admin_logout::admin_logout_handler,
        crate::modules::auth::adapter::incoming::web::routes::admin_session::admin_session_handler,
        crate::modules::auth::adapter::incoming::web::routes::gate_status::gate_status_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<AdminLoginResponse>,
            ErrorResponse,
            ErrorDetail,

            // Admin DTOs
            AdminLoginRequestDto,
            AdminLoginResponse,
            AdminLogoutResponse,
            AdminSessionResponse,
            GateStatusResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "admin", description = "Admin access gate and session endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("AUTH_OK_<millis>")
                        .description(Some("Session marker returned by /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
