use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminSessionResponse {
    #[schema(example = true)]
    pub authorized: bool,
}

/// Check admin session
///
/// Lets the admin panel reopen without running the gate again.
#[utoipa::path(
    get,
    path = "/api/admin/session",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "Session is live",
            body = inline(SuccessResponse<AdminSessionResponse>)
        ),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
    )
)]
#[get("/api/admin/session")]
pub async fn admin_session_handler(_session: AdminSession) -> impl Responder {
    ApiResponse::success(AdminSessionResponse { authorized: true })
}
