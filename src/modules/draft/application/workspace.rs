use std::collections::HashSet;

use crate::modules::draft::application::domain::collection::Collection;
use crate::modules::draft::application::domain::edits::{
    DraftField, InvalidEdit, ItemEdit, MessageEdit, ProjectEdit, ReviewEdit, ServiceEdit,
    SkillEdit, SocialEdit,
};
use crate::modules::portfolio::application::domain::entities::{
    PortfolioData, Platform, Project, Review, Service, Skill, SkillLevel, SocialLink,
};
use crate::modules::portfolio::application::domain::ids::next_id;

pub const FALLBACK_PROJECT_CATEGORY: &str = "Design";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkspaceError {
    #[error("{0} cannot be created from the admin panel")]
    NotCreatable(Collection),

    #[error(transparent)]
    InvalidEdit(#[from] InvalidEdit),

    #[error("Review {0} is already approved")]
    ApprovalIsFinal(String),

    #[error("Duplicate {0} id: {1}")]
    DuplicateId(Collection, String),
}

/// The admin's working copy. Owns its data outright, so nothing done here
/// is visible in the committed store until the whole value is handed back.
#[derive(Debug, Clone)]
pub struct DraftWorkspace {
    data: PortfolioData,
}

impl DraftWorkspace {
    pub fn open(committed: &PortfolioData) -> Self {
        Self {
            data: committed.clone(),
        }
    }

    pub fn data(&self) -> &PortfolioData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut PortfolioData {
        &mut self.data
    }

    pub fn into_data(self) -> PortfolioData {
        self.data
    }

    pub fn set_field(&mut self, field: DraftField) -> Result<(), WorkspaceError> {
        let data = &mut self.data;
        match field {
            DraftField::Name(v) => data.name = v,
            DraftField::Role(v) => data.role = v,
            DraftField::Bio(v) => data.bio = v,
            DraftField::HeroImage(v) => data.hero_image = v,
            DraftField::HeroMainText(v) => data.hero_main_text = v,
            DraftField::HeroSubText(v) => data.hero_sub_text = v,
            DraftField::AboutImage(v) => data.about_image = v,
            DraftField::AboutTitle(v) => data.about_title = v,
            DraftField::AboutSubtitle(v) => data.about_subtitle = v,
            DraftField::AboutDescription(v) => data.about_description = v,
            DraftField::ServicesTitle(v) => data.services_title = v,
            DraftField::ServicesSubtitle(v) => data.services_subtitle = v,
            DraftField::PortfolioTitle(v) => data.portfolio_title = v,
            DraftField::PortfolioSubtitle(v) => data.portfolio_subtitle = v,
            DraftField::ContactTitle(v) => data.contact_title = v,
            DraftField::ContactSubtitle(v) => data.contact_subtitle = v,
            DraftField::ReviewsTitle(v) => data.reviews_title = v,
            DraftField::ReviewsSubtitle(v) => data.reviews_subtitle = v,
            DraftField::Email(v) => data.email = v,
            DraftField::Location(v) => data.location = v,
            DraftField::CvUrl(v) => data.cv_url = v,
            DraftField::Skills(v) => {
                ensure_unique_ids(Collection::Skills, v.iter().map(|i| i.id.as_str()))?;
                data.skills = v;
            }
            DraftField::Services(v) => {
                ensure_unique_ids(Collection::Services, v.iter().map(|i| i.id.as_str()))?;
                data.services = v;
            }
            DraftField::Projects(v) => {
                ensure_unique_ids(Collection::Projects, v.iter().map(|i| i.id.as_str()))?;
                data.projects = v;
            }
            DraftField::Socials(v) => {
                ensure_unique_ids(Collection::Socials, v.iter().map(|i| i.id.as_str()))?;
                data.socials = v;
            }
            DraftField::Messages(v) => {
                ensure_unique_ids(Collection::Messages, v.iter().map(|i| i.id.as_str()))?;
                ensure_no_new_items(
                    Collection::Messages,
                    data.messages.iter().map(|i| i.id.as_str()),
                    v.iter().map(|i| i.id.as_str()),
                )?;
                data.messages = v;
            }
            DraftField::Reviews(v) => {
                ensure_unique_ids(Collection::Reviews, v.iter().map(|i| i.id.as_str()))?;
                ensure_no_new_items(
                    Collection::Reviews,
                    data.reviews.iter().map(|i| i.id.as_str()),
                    v.iter().map(|i| i.id.as_str()),
                )?;
                ensure_no_unapproval(&data.reviews, &v)?;
                data.reviews = v;
            }
            DraftField::ProjectCategories(v) => {
                let mut unique: Vec<String> = Vec::with_capacity(v.len());
                for label in v {
                    if !unique.contains(&label) {
                        unique.push(label);
                    }
                }
                data.project_categories = unique;
            }
        }
        Ok(())
    }

    /// Adds a default-valued item and returns its id. New projects go to the
    /// front of the grid; everything else is appended.
    pub fn add_item(&mut self, collection: Collection) -> Result<String, WorkspaceError> {
        let data = &mut self.data;
        let id = match collection {
            Collection::Projects => {
                let id = next_id(data.projects.iter().map(|i| i.id.as_str()));
                let category = data
                    .project_categories
                    .first()
                    .cloned()
                    .unwrap_or_else(|| FALLBACK_PROJECT_CATEGORY.to_string());
                data.projects.insert(
                    0,
                    Project {
                        image_url: format!("https://picsum.photos/seed/{id}/800/600"),
                        id: id.clone(),
                        title: "New Entry".to_string(),
                        category,
                        video_url: None,
                        link: "#".to_string(),
                    },
                );
                id
            }
            Collection::Skills => {
                let id = next_id(data.skills.iter().map(|i| i.id.as_str()));
                data.skills.push(Skill {
                    id: id.clone(),
                    name: "New Tech".to_string(),
                    level: SkillLevel::new(80),
                });
                id
            }
            Collection::Services => {
                let id = next_id(data.services.iter().map(|i| i.id.as_str()));
                data.services.push(Service {
                    id: id.clone(),
                    title: "New Service".to_string(),
                    description: "Description".to_string(),
                    icon_name: "Zap".to_string(),
                    long_description: None,
                });
                id
            }
            Collection::Socials => {
                let id = next_id(data.socials.iter().map(|i| i.id.as_str()));
                data.socials.push(SocialLink {
                    id: id.clone(),
                    platform: Platform::Github,
                    url: "#".to_string(),
                });
                id
            }
            // Only ever created by the public forms.
            Collection::Messages | Collection::Reviews => {
                return Err(WorkspaceError::NotCreatable(collection))
            }
        };

        Ok(id)
    }

    /// Returns whether an item was removed.
    pub fn remove_item(&mut self, collection: Collection, id: &str) -> bool {
        fn retain<T>(items: &mut Vec<T>, id: &str, id_of: impl Fn(&T) -> &str) -> bool {
            let before = items.len();
            items.retain(|item| id_of(item) != id);
            items.len() != before
        }

        let data = &mut self.data;
        match collection {
            Collection::Skills => retain(&mut data.skills, id, |i| &i.id),
            Collection::Services => retain(&mut data.services, id, |i| &i.id),
            Collection::Projects => retain(&mut data.projects, id, |i| &i.id),
            Collection::Socials => retain(&mut data.socials, id, |i| &i.id),
            Collection::Messages => retain(&mut data.messages, id, |i| &i.id),
            Collection::Reviews => retain(&mut data.reviews, id, |i| &i.id),
        }
    }

    /// Applies `edit` to the item with `id`. Returns false when no such item
    /// exists, leaving the draft untouched.
    pub fn update_item(
        &mut self,
        collection: Collection,
        id: &str,
        edit: ItemEdit,
    ) -> Result<bool, WorkspaceError> {
        if edit.collection() != collection {
            return Err(InvalidEdit {
                collection,
                reason: format!("edit targets {}", edit.collection()),
            }
            .into());
        }

        let data = &mut self.data;
        let found = match edit {
            ItemEdit::Skill(edit) => find(&mut data.skills, id, |i| &i.id).map(|skill| match edit {
                SkillEdit::Name(v) => skill.name = v,
                SkillEdit::Level(v) => skill.level = v,
            }),
            ItemEdit::Service(edit) => {
                find(&mut data.services, id, |i| &i.id).map(|service| match edit {
                    ServiceEdit::Title(v) => service.title = v,
                    ServiceEdit::Description(v) => service.description = v,
                    ServiceEdit::IconName(v) => service.icon_name = v,
                    ServiceEdit::LongDescription(v) => service.long_description = v,
                })
            }
            ItemEdit::Project(edit) => {
                find(&mut data.projects, id, |i| &i.id).map(|project| match edit {
                    ProjectEdit::Title(v) => project.title = v,
                    ProjectEdit::Category(v) => project.category = v,
                    ProjectEdit::ImageUrl(v) => project.image_url = v,
                    ProjectEdit::VideoUrl(v) => project.video_url = v,
                    ProjectEdit::Link(v) => project.link = v,
                })
            }
            ItemEdit::Social(edit) => {
                find(&mut data.socials, id, |i| &i.id).map(|social| match edit {
                    SocialEdit::Platform(v) => social.platform = v,
                    SocialEdit::Url(v) => social.url = v,
                })
            }
            ItemEdit::Message(MessageEdit::IsRead(v)) => {
                find(&mut data.messages, id, |i| &i.id).map(|message| message.is_read = v)
            }
            ItemEdit::Review(ReviewEdit::IsApproved(approve)) => {
                match find(&mut data.reviews, id, |i| &i.id) {
                    Some(review) => Some(set_approval(review, approve)?),
                    None => None,
                }
            }
        };

        Ok(found.is_some())
    }

    /// Returns whether the label was new.
    pub fn add_category(&mut self, label: &str) -> bool {
        let categories = &mut self.data.project_categories;
        if categories.iter().any(|c| c == label) {
            return false;
        }
        categories.push(label.to_string());
        true
    }

    /// Projects that still use the label keep it.
    pub fn remove_category(&mut self, label: &str) -> bool {
        let categories = &mut self.data.project_categories;
        let before = categories.len();
        categories.retain(|c| c != label);
        categories.len() != before
    }
}

fn find<'a, T>(items: &'a mut [T], id: &str, id_of: impl Fn(&T) -> &str) -> Option<&'a mut T> {
    items.iter_mut().find(|item| id_of(item) == id)
}

fn set_approval(review: &mut Review, approve: bool) -> Result<(), WorkspaceError> {
    match (review.is_approved, approve) {
        (true, false) => Err(WorkspaceError::ApprovalIsFinal(review.id.clone())),
        (false, true) => {
            review.approve();
            Ok(())
        }
        _ => Ok(()),
    }
}

fn ensure_unique_ids<'a>(
    collection: Collection,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), WorkspaceError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(WorkspaceError::DuplicateId(collection, id.to_string()));
        }
    }
    Ok(())
}

/// Messages and reviews come from the public forms; a replacement may only
/// drop or reorder what is already there.
fn ensure_no_new_items<'a>(
    collection: Collection,
    current: impl Iterator<Item = &'a str>,
    next: impl Iterator<Item = &'a str>,
) -> Result<(), WorkspaceError> {
    let known: HashSet<&str> = current.collect();
    for id in next {
        if !known.contains(id) {
            return Err(WorkspaceError::NotCreatable(collection));
        }
    }
    Ok(())
}

fn ensure_no_unapproval(current: &[Review], next: &[Review]) -> Result<(), WorkspaceError> {
    for review in next.iter().filter(|r| !r.is_approved) {
        if current.iter().any(|c| c.id == review.id && c.is_approved) {
            return Err(WorkspaceError::ApprovalIsFinal(review.id.clone()));
        }
    }
    Ok(())
}
