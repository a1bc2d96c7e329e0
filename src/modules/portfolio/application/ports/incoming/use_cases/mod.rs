mod get_public_portfolio;
mod submit_contact;
mod submit_review;

pub use get_public_portfolio::{GetPublicPortfolioUseCase, PublicProjectsView};
pub use submit_contact::{
    SubmitContactError, SubmitContactRequest, SubmitContactRequestError, SubmitContactUseCase,
};
pub use submit_review::{
    SubmitReviewError, SubmitReviewRequest, SubmitReviewRequestError, SubmitReviewUseCase,
};
