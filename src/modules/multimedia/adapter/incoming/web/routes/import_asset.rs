use actix_web::{get, http::header, post, web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::draft::application::DraftError;
use crate::modules::multimedia::application::domain::entities::AssetTarget;
use crate::modules::multimedia::application::domain::policies::upload_policy::UploadRejection;
use crate::modules::multimedia::application::ports::incoming::use_cases::{
    ImportAssetError, ImportAssetRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportTicketResponse {
    pub slot: AssetTarget,
    pub state: &'static str,
    pub preview_url: String,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Body is the raw file; `Content-Type` is its MIME type.
#[post("/api/admin/draft/assets/{slot}")]
pub async fn import_asset_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    slot: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> impl Responder {
    let slot = slot.into_inner();
    let mime = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let request = match ImportAssetRequest::new(&slot, mime, body.to_vec()) {
        Ok(request) => request,
        Err(e) => return ApiResponse::not_found("UNKNOWN_SLOT", &e.to_string()),
    };

    match data.media.import_asset.import(request).await {
        Ok(ticket) => {
            info!(slot = %ticket.slot, "Asset import accepted");
            ApiResponse::accepted(ImportTicketResponse {
                slot: ticket.slot,
                state: "pending",
                preview_url: ticket.preview_url,
            })
        }
        Err(e) => map_import_error(e),
    }
}

#[get("/api/admin/draft/assets")]
pub async fn list_asset_slots_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.draft.slot_statuses().await {
        Ok(slots) => ApiResponse::success(slots),
        Err(DraftError::NotOpen) => draft_not_open(),
        Err(e) => {
            error!(error = %e, "Failed to list asset slots");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn draft_not_open() -> HttpResponse {
    ApiResponse::conflict("DRAFT_NOT_OPEN", "Open a draft before importing assets")
}

fn map_import_error(err: ImportAssetError) -> HttpResponse {
    let message = err.to_string();
    match err {
        ImportAssetError::Rejected(rejection) => {
            warn!(reason = %rejection, "Asset rejected");
            match rejection {
                UploadRejection::Empty => ApiResponse::bad_request("EMPTY_FILE", &message),
                UploadRejection::TooLarge { .. } => {
                    ApiResponse::payload_too_large("FILE_TOO_LARGE", &message)
                }
                UploadRejection::UnsupportedType { .. } => {
                    ApiResponse::unsupported_media_type("UNSUPPORTED_TYPE", &message)
                }
                UploadRejection::ContentMismatch { .. } => {
                    ApiResponse::bad_request("CONTENT_MISMATCH", &message)
                }
            }
        }
        ImportAssetError::Draft(DraftError::NotOpen) => draft_not_open(),
        ImportAssetError::Draft(DraftError::UnknownTarget(_)) => {
            ApiResponse::not_found("UNKNOWN_SLOT", &message)
        }
        ImportAssetError::Draft(e) => {
            error!(error = %e, "Failed to start asset import");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::PNG_BYTES;

    const TOKEN: &str = "AUTH_OK_1";

    async fn state(open_draft: bool) -> web::Data<AppState> {
        let state = TestAppStateBuilder::default().unlock(TOKEN).await.build();
        if open_draft {
            state.draft.open().await;
        }
        state
    }

    fn upload(slot: &str, mime: &str, body: &'static [u8]) -> test::TestRequest {
        test::TestRequest::post()
            .uri(&format!("/api/admin/draft/assets/{slot}"))
            .insert_header(("Authorization", format!("Bearer {TOKEN}")))
            .insert_header((header::CONTENT_TYPE, mime))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn import_returns_accepted_with_preview() {
        let state = state(true).await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(import_asset_handler)
                .service(list_asset_slots_handler),
        )
        .await;

        let resp = test::call_service(&app, upload("hero", "image/png", PNG_BYTES).to_request()).await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["slot"], "hero");
        assert_eq!(json["data"]["state"], "pending");
        assert!(json["data"]["previewUrl"]
            .as_str()
            .unwrap()
            .starts_with("/api/admin/previews/"));

        let req = test::TestRequest::get()
            .uri("/api/admin/draft/assets")
            .insert_header(("Authorization", format!("Bearer {TOKEN}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn import_rejects_wrong_type_for_slot() {
        let app = test::init_service(
            App::new()
                .app_data(state(true).await)
                .service(import_asset_handler),
        )
        .await;

        let resp =
            test::call_service(&app, upload("hero", "video/mp4", b"\x00\x01").to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[actix_web::test]
    async fn import_unknown_slot_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(state(true).await)
                .service(import_asset_handler),
        )
        .await;

        let resp =
            test::call_service(&app, upload("banner", "image/png", PNG_BYTES).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp =
            test::call_service(&app, upload("thumb-404", "image/png", PNG_BYTES).to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn import_without_draft_is_conflict() {
        let app = test::init_service(
            App::new()
                .app_data(state(false).await)
                .service(import_asset_handler),
        )
        .await;

        let resp = test::call_service(&app, upload("hero", "image/png", PNG_BYTES).to_request()).await;
        let status = resp.status();
        let json: Value = test::read_body_json(resp).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["error"]["code"], "DRAFT_NOT_OPEN");
    }
}
