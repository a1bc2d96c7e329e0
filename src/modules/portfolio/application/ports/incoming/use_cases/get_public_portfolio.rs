use async_trait::async_trait;
use serde::Serialize;

use crate::modules::portfolio::application::domain::views::{PublicPortfolio, PublicProject};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProjectsView {
    /// "All" followed by every category in use.
    pub filters: Vec<String>,
    pub active: String,
    pub projects: Vec<PublicProject>,
}

#[async_trait]
pub trait GetPublicPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> PublicPortfolio;

    async fn projects(&self, category: Option<String>) -> PublicProjectsView;
}
