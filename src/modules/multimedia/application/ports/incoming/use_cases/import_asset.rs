use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::modules::draft::application::DraftError;
use crate::modules::multimedia::application::domain::entities::{
    AssetFile, AssetTarget, ImportCompletion, UnknownAssetSlot,
};
use crate::modules::multimedia::application::domain::policies::upload_policy::UploadRejection;

// ========================= Request =========================

#[derive(Debug, Clone)]
pub struct ImportAssetRequest {
    target: AssetTarget,
    file: AssetFile,
}

impl ImportAssetRequest {
    pub fn new(slot: &str, mime: &str, bytes: Vec<u8>) -> Result<Self, UnknownAssetSlot> {
        Ok(Self {
            target: slot.parse()?,
            file: AssetFile::new(mime, bytes),
        })
    }

    pub fn target(&self) -> &AssetTarget {
        &self.target
    }

    pub fn into_parts(self) -> (AssetTarget, AssetFile) {
        (self.target, self.file)
    }
}

// ========================= Response =========================

/// Returned as soon as the slot is pending. `completion` resolves when the
/// encode has been applied or dropped.
#[derive(Debug)]
pub struct ImportTicket {
    pub slot: AssetTarget,
    pub preview_url: String,
    pub completion: JoinHandle<ImportCompletion>,
}

// ========================= Error =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportAssetError {
    #[error(transparent)]
    Rejected(#[from] UploadRejection),

    #[error(transparent)]
    Draft(#[from] DraftError),
}

// ========================= Use case =========================

#[async_trait]
pub trait ImportAssetUseCase: Send + Sync {
    async fn import(&self, request: ImportAssetRequest) -> Result<ImportTicket, ImportAssetError>;
}
