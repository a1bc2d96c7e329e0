use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    SubmitReviewError, SubmitReviewRequest, SubmitReviewRequestError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewDto {
    pub client_name: String,
    #[serde(default)]
    pub client_role: String,
    pub content: String,
    pub rating: i64,
}

#[post("/api/reviews")]
pub async fn submit_review_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubmitReviewDto>,
) -> impl Responder {
    let dto = payload.into_inner();

    let request = match SubmitReviewRequest::new(
        dto.client_name,
        dto.client_role,
        dto.content,
        dto.rating,
    ) {
        Ok(request) => request,
        Err(err) => return map_request_error(err),
    };

    match data.portfolio.submit_review.execute(request).await {
        Ok(review) => {
            info!(review_id = %review.id, "Review awaiting approval");
            ApiResponse::created(review)
        }
        Err(SubmitReviewError::StoreError(msg)) => {
            error!(error = %msg, "Failed to store review");
            ApiResponse::internal_error()
        }
    }
}

fn map_request_error(err: SubmitReviewRequestError) -> HttpResponse {
    match err {
        SubmitReviewRequestError::EmptyClientName => {
            ApiResponse::bad_request("EMPTY_CLIENT_NAME", "Client name cannot be empty")
        }
        SubmitReviewRequestError::EmptyContent => {
            ApiResponse::bad_request("EMPTY_CONTENT", "Review content cannot be empty")
        }
        SubmitReviewRequestError::InvalidRating(e) => {
            ApiResponse::bad_request("INVALID_RATING", &e.to_string())
        }
    }
}
