use serde::{Deserialize, Serialize};
use std::fmt;

//
// ──────────────────────────────────────────────────────────
// Value objects
// ──────────────────────────────────────────────────────────
//

/// Skill proficiency as a percentage. Always within [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    pub fn new(level: i64) -> Self {
        Self(level.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<i64> for SkillLevel {
    fn from(level: i64) -> Self {
        Self::new(level)
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.0
    }
}

/// Review star rating. Values read from storage are clamped to [1, 5];
/// public submissions go through `Rating::try_new` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Rating(u8);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Rating must be between {min} and {max}, got {actual}")]
pub struct InvalidRating {
    pub min: u8,
    pub max: u8,
    pub actual: i64,
}

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn try_new(value: i64) -> Result<Self, InvalidRating> {
        if value < Self::MIN as i64 || value > Self::MAX as i64 {
            return Err(InvalidRating {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Filled/empty indicator per star, in display order.
    pub fn star_indicators(&self) -> [bool; 5] {
        let mut stars = [false; 5];
        for (i, star) in stars.iter_mut().enumerate() {
            *star = (i as u8) < self.0;
        }
        stars
    }
}

impl From<i64> for Rating {
    fn from(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Twitter,
    Instagram,
    Linkedin,
    Github,
    Facebook,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
            Platform::Linkedin => "Linkedin",
            Platform::Github => "Github",
            Platform::Facebook => "Facebook",
        };
        write!(f, "{s}")
    }
}

//
// ──────────────────────────────────────────────────────────
// Collection items
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Symbolic icon name, resolved at render time.
    pub icon_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Expected to name an entry of `project_categories`; not enforced.
    pub category: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub id: String,
    pub platform: Platform,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Display string, not parsed back.
    pub timestamp: String,
    pub is_read: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub client_name: String,
    pub client_role: String,
    pub content: String,
    pub rating: Rating,
    pub date: String,
    pub is_approved: bool,
}

impl Review {
    /// Approval is one-way; there is no transition back to unapproved.
    pub fn approve(&mut self) {
        self.is_approved = true;
    }
}

//
// ──────────────────────────────────────────────────────────
// Aggregate
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
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
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub messages: Vec<ContactMessage>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub project_categories: Vec<String>,
}

impl PortfolioData {
    pub fn approved_reviews(&self) -> impl Iterator<Item = &Review> {
        self.reviews.iter().filter(|r| r.is_approved)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
