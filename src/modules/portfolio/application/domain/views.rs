//! Read-only projections of the committed store, as the public site sees it.

use serde::Serialize;

use super::entities::{PortfolioData, Project, Review, Service, Skill, SocialLink};
use super::icons::{resolve_icon, ResolvedIcon};

pub const ALL_CATEGORIES: &str = "All";
pub const DEFAULT_CONTACT_SUBJECT: &str = "General Inquiry";

pub fn inquiry_subject(service_title: &str) -> String {
    format!("Inquiry: {service_title}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectMedia {
    ImageCaseStudy,
    VideoReel,
}

impl ProjectMedia {
    pub fn of(project: &Project) -> Self {
        match project.video_url {
            Some(_) => ProjectMedia::VideoReel,
            None => ProjectMedia::ImageCaseStudy,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProject {
    #[serde(flatten)]
    pub project: Project,
    pub media: ProjectMedia,
}

impl From<&Project> for PublicProject {
    fn from(project: &Project) -> Self {
        Self {
            media: ProjectMedia::of(project),
            project: project.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicService {
    #[serde(flatten)]
    pub service: Service,
    pub icon: ResolvedIcon,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicReview {
    #[serde(flatten)]
    pub review: Review,
    pub stars: [bool; 5],
}

/// The committed store minus everything the public must not see:
/// contact messages and unapproved reviews.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPortfolio {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub hero_image: String,
    pub hero_main_text: String,
    pub hero_sub_text: String,
    pub about_image: String,
    pub about_title: String,
    pub about_subtitle: String,
    pub about_description: String,
    pub services_title: String,
    pub services_subtitle: String,
    pub portfolio_title: String,
    pub portfolio_subtitle: String,
    pub contact_title: String,
    pub contact_subtitle: String,
    pub reviews_title: String,
    pub reviews_subtitle: String,
    pub email: String,
    pub location: String,
    pub cv_url: String,
    pub skills: Vec<Skill>,
    pub services: Vec<PublicService>,
    pub projects: Vec<PublicProject>,
    pub socials: Vec<SocialLink>,
    pub reviews: Vec<PublicReview>,
    pub project_categories: Vec<String>,
}

impl From<&PortfolioData> for PublicPortfolio {
    fn from(data: &PortfolioData) -> Self {
        Self {
            name: data.name.clone(),
            role: data.role.clone(),
            bio: data.bio.clone(),
            hero_image: data.hero_image.clone(),
            hero_main_text: data.hero_main_text.clone(),
            hero_sub_text: data.hero_sub_text.clone(),
            about_image: data.about_image.clone(),
            about_title: data.about_title.clone(),
            about_subtitle: data.about_subtitle.clone(),
            about_description: data.about_description.clone(),
            services_title: data.services_title.clone(),
            services_subtitle: data.services_subtitle.clone(),
            portfolio_title: data.portfolio_title.clone(),
            portfolio_subtitle: data.portfolio_subtitle.clone(),
            contact_title: data.contact_title.clone(),
            contact_subtitle: data.contact_subtitle.clone(),
            reviews_title: data.reviews_title.clone(),
            reviews_subtitle: data.reviews_subtitle.clone(),
            email: data.email.clone(),
            location: data.location.clone(),
            cv_url: data.cv_url.clone(),
            skills: data.skills.clone(),
            services: data
                .services
                .iter()
                .map(|service| PublicService {
                    icon: resolve_icon(&service.icon_name),
                    service: service.clone(),
                })
                .collect(),
            projects: data.projects.iter().map(PublicProject::from).collect(),
            socials: data.socials.clone(),
            reviews: data
                .approved_reviews()
                .map(|review| PublicReview {
                    stars: review.rating.star_indicators(),
                    review: review.clone(),
                })
                .collect(),
            project_categories: data.project_categories.clone(),
        }
    }
}

/// Filter tabs for the portfolio grid: "All" followed by every category
/// actually used by a project, in first-seen order.
pub fn category_filters(projects: &[Project]) -> Vec<String> {
    let mut filters = vec![ALL_CATEGORIES.to_string()];
    for project in projects {
        if !filters.iter().any(|existing| *existing == project.category) {
            filters.push(project.category.clone());
        }
    }
    filters
}

pub fn projects_in_category<'a>(projects: &'a [Project], category: Option<&str>) -> Vec<&'a Project> {
    match category {
        None | Some(ALL_CATEGORIES) => projects.iter().collect(),
        Some(category) => projects.iter().filter(|p| p.category == category).collect(),
    }
}
