pub mod get_public_portfolio_service;
pub mod submit_contact_service;
pub mod submit_review_service;

pub use get_public_portfolio_service::GetPublicPortfolioService;
pub use submit_contact_service::SubmitContactService;
pub use submit_review_service::SubmitReviewService;
