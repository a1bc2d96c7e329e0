//! Every edit the admin panel can make, as closed enums.
//!
//! Each edit arrives as `{ "field": <name>, "value": <json> }`; an unknown
//! name or a value of the wrong shape fails to parse instead of being
//! written through.

use serde::Deserialize;
use serde_json::Value;

use super::collection::Collection;
use crate::modules::portfolio::application::domain::entities::{
    ContactMessage, Platform, Project, Review, Service, Skill, SkillLevel, SocialLink,
};

/// A top-level field of the portfolio, replaced wholesale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum DraftField {
    Name(String),
    Role(String),
    Bio(String),
    HeroImage(String),
    HeroMainText(String),
    HeroSubText(String),
    AboutImage(String),
    AboutTitle(String),
    AboutSubtitle(String),
    AboutDescription(String),
    ServicesTitle(String),
    ServicesSubtitle(String),
    PortfolioTitle(String),
    PortfolioSubtitle(String),
    ContactTitle(String),
    ContactSubtitle(String),
    ReviewsTitle(String),
    ReviewsSubtitle(String),
    Email(String),
    Location(String),
    CvUrl(String),
    Skills(Vec<Skill>),
    Services(Vec<Service>),
    Projects(Vec<Project>),
    Socials(Vec<SocialLink>),
    Messages(Vec<ContactMessage>),
    Reviews(Vec<Review>),
    ProjectCategories(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum SkillEdit {
    Name(String),
    Level(SkillLevel),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ServiceEdit {
    Title(String),
    Description(String),
    IconName(String),
    LongDescription(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ProjectEdit {
    Title(String),
    Category(String),
    ImageUrl(String),
    VideoUrl(Option<String>),
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum SocialEdit {
    Platform(Platform),
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum MessageEdit {
    IsRead(bool),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ReviewEdit {
    IsApproved(bool),
}

/// An edit to one item, already matched to its collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemEdit {
    Skill(SkillEdit),
    Service(ServiceEdit),
    Project(ProjectEdit),
    Social(SocialEdit),
    Message(MessageEdit),
    Review(ReviewEdit),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {collection} edit: {reason}")]
pub struct InvalidEdit {
    pub collection: Collection,
    pub reason: String,
}

impl ItemEdit {
    pub fn parse(collection: Collection, edit: Value) -> Result<Self, InvalidEdit> {
        let invalid = |e: serde_json::Error| InvalidEdit {
            collection,
            reason: e.to_string(),
        };

        Ok(match collection {
            Collection::Skills => ItemEdit::Skill(serde_json::from_value(edit).map_err(invalid)?),
            Collection::Services => {
                ItemEdit::Service(serde_json::from_value(edit).map_err(invalid)?)
            }
            Collection::Projects => {
                ItemEdit::Project(serde_json::from_value(edit).map_err(invalid)?)
            }
            Collection::Socials => ItemEdit::Social(serde_json::from_value(edit).map_err(invalid)?),
            Collection::Messages => {
                ItemEdit::Message(serde_json::from_value(edit).map_err(invalid)?)
            }
            Collection::Reviews => ItemEdit::Review(serde_json::from_value(edit).map_err(invalid)?),
        })
    }

    pub fn collection(&self) -> Collection {
        match self {
            ItemEdit::Skill(_) => Collection::Skills,
            ItemEdit::Service(_) => Collection::Services,
            ItemEdit::Project(_) => Collection::Projects,
            ItemEdit::Social(_) => Collection::Socials,
            ItemEdit::Message(_) => Collection::Messages,
            ItemEdit::Review(_) => Collection::Reviews,
        }
    }
}
