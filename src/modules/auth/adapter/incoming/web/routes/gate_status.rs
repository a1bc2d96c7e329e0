use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::modules::auth::application::domain::gate::{GatePhaseKind, GateStatus};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GateStatusResponse {
    /// `idle`, `verifying` or `lockedOut`
    #[schema(example = "idle")]
    pub phase: String,
    #[schema(example = 2)]
    pub failed_attempts: u32,
    #[schema(example = 3)]
    pub remaining_attempts: u32,
    #[schema(example = 0)]
    pub lockout_remaining_secs: u64,
    /// 0-100 while verifying
    #[schema(example = 0)]
    pub verification_progress: u8,
}

impl From<GateStatus> for GateStatusResponse {
    fn from(status: GateStatus) -> Self {
        let phase = match status.phase {
            GatePhaseKind::Idle => "idle",
            GatePhaseKind::Verifying => "verifying",
            GatePhaseKind::LockedOut => "lockedOut",
        };
        Self {
            phase: phase.to_string(),
            failed_attempts: status.failed_attempts,
            remaining_attempts: status.remaining_attempts,
            lockout_remaining_secs: status.lockout_remaining_secs,
            verification_progress: status.verification_progress,
        }
    }
}

/// Access gate status
///
/// Drives the lockout countdown and verification progress bar.
#[utoipa::path(
    get,
    path = "/api/admin/gate",
    tag = "admin",
    responses(
        (
            status = 200,
            description = "Current gate state",
            body = inline(SuccessResponse<GateStatusResponse>),
            example = json!({
                "success": true,
                "data": {
                    "phase": "lockedOut",
                    "failedAttempts": 5,
                    "remainingAttempts": 0,
                    "lockoutRemainingSecs": 28,
                    "verificationProgress": 0
                }
            })
        ),
    )
)]
#[get("/api/admin/gate")]
pub async fn gate_status_handler(data: web::Data<AppState>) -> impl Responder {
    let status = data.admin.login.status().await;
    ApiResponse::success(GateStatusResponse::from(status))
}
