use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminLogoutResponse {
    /// Whether an unsaved draft was dropped
    #[schema(example = false)]
    pub draft_discarded: bool,
}

/// Admin logout
///
/// Ends the admin session and drops any draft that was not committed.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "Session ended",
            body = inline(SuccessResponse<AdminLogoutResponse>),
            example = json!({ "success": true, "data": { "draftDiscarded": true } })
        ),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/logout")]
pub async fn admin_logout_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft_discarded = data.draft.discard().await;

    match data.admin.logout.execute().await {
        Ok(()) => {
            info!(draft_discarded, "Admin session closed");
            ApiResponse::success(AdminLogoutResponse { draft_discarded })
        }
        Err(e) => {
            error!(error = %e, "Failed to clear admin session");
            ApiResponse::internal_error()
        }
    }
}
