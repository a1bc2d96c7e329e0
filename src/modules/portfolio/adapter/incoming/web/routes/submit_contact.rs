use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactRequest, SubmitContactRequestError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct SubmitContactDto {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/contact")]
pub async fn submit_contact_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubmitContactDto>,
) -> impl Responder {
    let dto = payload.into_inner();

    let request = match SubmitContactRequest::new(dto.name, dto.email, dto.subject, dto.message) {
        Ok(request) => request,
        Err(err) => return map_request_error(err),
    };

    match data.portfolio.submit_contact.execute(request).await {
        Ok(message) => {
            info!(message_id = %message.id, "Contact form submitted");
            ApiResponse::created(message)
        }
        Err(SubmitContactError::StoreError(msg)) => {
            error!(error = %msg, "Failed to store contact message");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_request_error(err: SubmitContactRequestError) -> HttpResponse {
    match err {
        SubmitContactRequestError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        SubmitContactRequestError::InvalidEmailFormat => {
            ApiResponse::bad_request("INVALID_EMAIL", "Email address is not valid")
        }
        SubmitContactRequestError::EmptyMessage => {
            ApiResponse::bad_request("EMPTY_MESSAGE", "Message cannot be empty")
        }
    }
}
