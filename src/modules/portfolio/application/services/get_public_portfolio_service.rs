use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::portfolio::application::domain::views::{
    category_filters, projects_in_category, PublicPortfolio, PublicProject, ALL_CATEGORIES,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPublicPortfolioUseCase, PublicProjectsView,
};
use crate::modules::portfolio::application::store::PortfolioStore;

pub struct GetPublicPortfolioService {
    store: Arc<PortfolioStore>,
}

impl GetPublicPortfolioService {
    pub fn new(store: Arc<PortfolioStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GetPublicPortfolioUseCase for GetPublicPortfolioService {
    async fn execute(&self) -> PublicPortfolio {
        let data = self.store.snapshot().await;
        PublicPortfolio::from(&data)
    }

    async fn projects(&self, category: Option<String>) -> PublicProjectsView {
        let data = self.store.snapshot().await;
        let active = category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| ALL_CATEGORIES.to_string());

        PublicProjectsView {
            filters: category_filters(&data.projects),
            projects: projects_in_category(&data.projects, Some(&active))
                .into_iter()
                .map(PublicProject::from)
                .collect(),
            active,
        }
    }
}
