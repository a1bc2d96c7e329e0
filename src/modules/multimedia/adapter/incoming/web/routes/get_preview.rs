use actix_web::{get, http::header, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Raw bytes of a file whose import is still running.
#[get("/api/admin/previews/{id}")]
pub async fn get_preview_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    id: web::Path<String>,
) -> impl Responder {
    let Ok(id) = id.parse::<Uuid>() else {
        return ApiResponse::bad_request("INVALID_PREVIEW_ID", "Preview id must be a UUID");
    };

    match data.media.previews.get(id).await {
        Some(preview) => HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, preview.mime))
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .body(preview.bytes.to_vec()),
        None => ApiResponse::not_found("PREVIEW_NOT_FOUND", "Preview has expired"),
    }
}
