use std::sync::Arc;

use crate::modules::multimedia::application::ports::incoming::use_cases::ImportAssetUseCase;
use crate::modules::multimedia::application::services::PreviewRegistry;

#[derive(Clone)]
pub struct MediaUseCases {
    pub import_asset: Arc<dyn ImportAssetUseCase + Send + Sync>,
    pub previews: Arc<PreviewRegistry>,
}
