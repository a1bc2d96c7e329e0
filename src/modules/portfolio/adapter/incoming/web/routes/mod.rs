mod get_portfolio;
mod submit_contact;
mod submit_review;

pub use get_portfolio::{get_portfolio_handler, get_portfolio_projects_handler};
pub use submit_contact::submit_contact_handler;
pub use submit_review::submit_review_handler;
