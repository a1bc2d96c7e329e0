use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::modules::draft::application::DraftService;
use crate::modules::multimedia::application::domain::entities::ImportCompletion;
use crate::modules::multimedia::application::domain::policies::upload_policy::UploadPolicy;
use crate::modules::multimedia::application::ports::incoming::use_cases::{
    ImportAssetError, ImportAssetRequest, ImportAssetUseCase, ImportTicket,
};
use crate::modules::multimedia::application::ports::outgoing::AssetEncoder;
use crate::modules::multimedia::application::services::PreviewRegistry;

pub struct ImportAssetService {
    drafts: Arc<DraftService>,
    previews: Arc<PreviewRegistry>,
    encoder: Arc<dyn AssetEncoder>,
    policy: UploadPolicy,
}

impl ImportAssetService {
    pub fn new(
        drafts: Arc<DraftService>,
        previews: Arc<PreviewRegistry>,
        encoder: Arc<dyn AssetEncoder>,
        policy: UploadPolicy,
    ) -> Self {
        Self {
            drafts,
            previews,
            encoder,
            policy,
        }
    }
}

#[async_trait]
impl ImportAssetUseCase for ImportAssetService {
    async fn import(&self, request: ImportAssetRequest) -> Result<ImportTicket, ImportAssetError> {
        let (target, file) = request.into_parts();

        // 1) Reject before anything is registered.
        self.policy.check(target.kind(), &file)?;

        // 2) Preview first so the pending slot can point at it.
        let (mime, bytes) = file.into_parts();
        let size = bytes.len();
        let bytes = Arc::new(bytes);
        let preview = self.previews.register(&mime, Arc::clone(&bytes)).await;

        let handle = match self.drafts.begin_import(target.clone(), Some(preview)).await {
            Ok(handle) => handle,
            Err(e) => {
                self.previews.revoke(preview).await;
                return Err(e.into());
            }
        };

        info!(slot = %target, mime = %mime, bytes = size, "Asset import started");

        // 3) Encode off the async workers, then hand the result to the draft.
        let drafts = Arc::clone(&self.drafts);
        let previews = Arc::clone(&self.previews);
        let encoder = Arc::clone(&self.encoder);
        let completion = tokio::spawn(async move {
            let encoded = tokio::task::spawn_blocking(move || encoder.encode(&mime, &bytes)).await;
            let result = match encoded {
                Ok(Ok(value)) => Ok(value),
                Ok(Err(e)) => Err(e.to_string()),
                Err(e) => Err(format!("Encoding task failed: {e}")),
            };

            let outcome = drafts.complete_import(&handle, result).await;
            previews.revoke(preview).await;

            if outcome == ImportCompletion::Abandoned {
                debug!(slot = %handle.target(), "Dropped stale import result");
            }
            outcome
        });

        Ok(ImportTicket {
            slot: target,
            preview_url: PreviewRegistry::url_for(preview),
            completion,
        })
    }
}
