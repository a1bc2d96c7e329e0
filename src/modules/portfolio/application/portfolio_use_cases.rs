use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPublicPortfolioUseCase, SubmitContactUseCase, SubmitReviewUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get_public: Arc<dyn GetPublicPortfolioUseCase + Send + Sync>,
    pub submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub submit_review: Arc<dyn SubmitReviewUseCase + Send + Sync>,
}
