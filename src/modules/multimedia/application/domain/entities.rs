use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::modules::portfolio::application::domain::entities::PortfolioData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Video,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssetKind::Image => "image",
            AssetKind::Video => "video",
        };
        write!(f, "{s}")
    }
}

/// The draft field an imported file lands in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetTarget {
    Hero,
    About,
    Thumbnail(String),
    Video(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown asset slot: {0}")]
pub struct UnknownAssetSlot(pub String);

impl FromStr for AssetTarget {
    type Err = UnknownAssetSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let project_id = |prefix: &str| {
            s.strip_prefix(prefix)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
        };

        match s {
            "hero" => Ok(AssetTarget::Hero),
            "about" => Ok(AssetTarget::About),
            _ => project_id("thumb-")
                .map(AssetTarget::Thumbnail)
                .or_else(|| project_id("video-").map(AssetTarget::Video))
                .ok_or_else(|| UnknownAssetSlot(s.to_string())),
        }
    }
}

impl fmt::Display for AssetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetTarget::Hero => write!(f, "hero"),
            AssetTarget::About => write!(f, "about"),
            AssetTarget::Thumbnail(id) => write!(f, "thumb-{id}"),
            AssetTarget::Video(id) => write!(f, "video-{id}"),
        }
    }
}

impl Serialize for AssetTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl AssetTarget {
    pub fn kind(&self) -> AssetKind {
        match self {
            AssetTarget::Video(_) => AssetKind::Video,
            _ => AssetKind::Image,
        }
    }

    pub fn project_id(&self) -> Option<&str> {
        match self {
            AssetTarget::Thumbnail(id) | AssetTarget::Video(id) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn exists_in(&self, data: &PortfolioData) -> bool {
        match self.project_id() {
            Some(id) => data.project(id).is_some(),
            None => true,
        }
    }

    /// Writes `value` into the slot. Returns false when the project is gone.
    pub fn apply(&self, data: &mut PortfolioData, value: String) -> bool {
        match self {
            AssetTarget::Hero => data.hero_image = value,
            AssetTarget::About => data.about_image = value,
            AssetTarget::Thumbnail(id) | AssetTarget::Video(id) => {
                let Some(project) = data.projects.iter_mut().find(|p| p.id == *id) else {
                    return false;
                };
                if let AssetTarget::Video(_) = self {
                    project.video_url = Some(value);
                } else {
                    project.image_url = value;
                }
            }
        }
        true
    }
}

/// A user-supplied file as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    mime: String,
    bytes: Vec<u8>,
}

impl AssetFile {
    /// Lowercases the MIME type and drops any parameters.
    pub fn new(mime: &str, bytes: Vec<u8>) -> Self {
        let mime = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        Self { mime, bytes }
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.mime, self.bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SlotStatus {
    #[serde(rename_all = "camelCase")]
    Pending { preview_url: Option<String> },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub slot: AssetTarget,
    #[serde(flatten)]
    pub status: SlotStatus,
}

/// What happened when an encode finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImportCompletion {
    Applied,
    /// The project was removed from the draft while encoding.
    TargetMissing,
    Failed,
    /// The draft closed or the slot was re-imported first.
    Abandoned,
}
