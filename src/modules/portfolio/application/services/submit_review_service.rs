use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::portfolio::application::domain::entities::Review;
use crate::modules::portfolio::application::domain::ids::next_id;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    SubmitReviewError, SubmitReviewRequest, SubmitReviewUseCase,
};
use crate::modules::portfolio::application::store::PortfolioStore;

pub struct SubmitReviewService {
    store: Arc<PortfolioStore>,
}

impl SubmitReviewService {
    pub fn new(store: Arc<PortfolioStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubmitReviewUseCase for SubmitReviewService {
    async fn execute(&self, request: SubmitReviewRequest) -> Result<Review, SubmitReviewError> {
        let date = Utc::now().format("%Y-%m-%d").to_string();

        let review = self
            .store
            .update(|data| {
                let review = Review {
                    id: next_id(data.reviews.iter().map(|r| r.id.as_str())),
                    client_name: request.client_name().to_string(),
                    client_role: request.client_role().to_string(),
                    content: request.content().to_string(),
                    rating: request.rating(),
                    date,
                    // Stays hidden until an admin approves it.
                    is_approved: false,
                };
                data.reviews.push(review.clone());
                review
            })
            .await
            .map_err(|e| SubmitReviewError::StoreError(e.to_string()))?;

        info!(review_id = %review.id, rating = review.rating.value(), "Review submitted");
        Ok(review)
    }
}
