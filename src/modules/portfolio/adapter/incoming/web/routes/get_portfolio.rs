use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::debug;

use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    pub category: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    let view = data.portfolio.get_public.execute().await;
    debug!(
        projects = view.projects.len(),
        reviews = view.reviews.len(),
        "Serving public portfolio"
    );
    ApiResponse::success(view)
}

#[get("/api/portfolio/projects")]
pub async fn get_portfolio_projects_handler(
    query: web::Query<ProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category = query.into_inner().category;
    ApiResponse::success(data.portfolio.get_public.projects(category).await)
}
