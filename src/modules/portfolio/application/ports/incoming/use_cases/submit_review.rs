use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::{InvalidRating, Rating, Review};

// ========================= Request =========================

#[derive(Debug, Clone)]
pub struct SubmitReviewRequest {
    client_name: String,
    client_role: String,
    content: String,
    rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitReviewRequestError {
    #[error("Client name cannot be empty")]
    EmptyClientName,

    #[error("Review content cannot be empty")]
    EmptyContent,

    #[error(transparent)]
    InvalidRating(#[from] InvalidRating),
}

impl SubmitReviewRequest {
    pub fn new(
        client_name: String,
        client_role: String,
        content: String,
        rating: i64,
    ) -> Result<Self, SubmitReviewRequestError> {
        let client_name = client_name.trim().to_string();
        if client_name.is_empty() {
            return Err(SubmitReviewRequestError::EmptyClientName);
        }

        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(SubmitReviewRequestError::EmptyContent);
        }

        let rating = Rating::try_new(rating)?;

        Ok(Self {
            client_name,
            client_role: client_role.trim().to_string(),
            content,
            rating,
        })
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn client_role(&self) -> &str {
        &self.client_role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }
}

// ========================= Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitReviewError {
    #[error("Failed to save review: {0}")]
    StoreError(String),
}

// ========================= Use case =========================

#[async_trait]
pub trait SubmitReviewUseCase: Send + Sync {
    async fn execute(&self, request: SubmitReviewRequest) -> Result<Review, SubmitReviewError>;
}
