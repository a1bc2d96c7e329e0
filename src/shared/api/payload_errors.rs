use actix_web::dev::ServiceResponse;
use actix_web::http::{header, StatusCode};
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};

use crate::shared::api::ApiResponse;

/// Rewrites the extractor's plain-text 413 into the response envelope.
pub fn payload_error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::PAYLOAD_TOO_LARGE, payload_too_large)
}

fn payload_too_large<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let already_wrapped = res
        .response()
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|v| v.as_bytes().starts_with(b"application/json"));
    if already_wrapped {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let (req, _) = res.into_parts();
    let response = ApiResponse::payload_too_large(
        "FILE_TOO_LARGE",
        "Request body exceeds the upload limit",
    );
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}
