use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::modules::draft::application::domain::collection::Collection;
use crate::modules::draft::application::domain::edits::{DraftField, ItemEdit};
use crate::modules::draft::application::workspace::{DraftWorkspace, WorkspaceError};
use crate::modules::multimedia::application::domain::entities::{
    AssetTarget, ImportCompletion, SlotStatus, SlotView,
};
use crate::modules::multimedia::application::domain::import_handle::ImportHandle;
use crate::modules::multimedia::application::services::PreviewRegistry;
use crate::modules::portfolio::application::domain::entities::PortfolioData;
use crate::modules::portfolio::application::store::{PortfolioStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("No draft is open")]
    NotOpen,

    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    #[error("Draft has no slot {0}")]
    UnknownTarget(AssetTarget),

    #[error("Failed to save draft: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitOutcome {
    pub abandoned_imports: usize,
}

enum SlotState {
    Pending {
        handle: ImportHandle,
        preview: Option<Uuid>,
    },
    Failed {
        reason: String,
    },
}

struct ActiveDraft {
    generation: Uuid,
    workspace: DraftWorkspace,
    slots: BTreeMap<AssetTarget, SlotState>,
}

impl ActiveDraft {
    /// Cancels every pending import and returns the previews to revoke.
    fn abandon_imports(&mut self) -> (usize, Vec<Uuid>) {
        let mut abandoned = 0;
        let mut previews = Vec::new();
        for (_, slot) in std::mem::take(&mut self.slots) {
            if let SlotState::Pending { handle, preview } = slot {
                handle.cancel();
                abandoned += 1;
                previews.extend(preview);
            }
        }
        (abandoned, previews)
    }
}

/// The admin session's single draft, plus the imports writing into it.
pub struct DraftService {
    store: Arc<PortfolioStore>,
    previews: Arc<PreviewRegistry>,
    active: Mutex<Option<ActiveDraft>>,
}

impl DraftService {
    pub fn new(store: Arc<PortfolioStore>, previews: Arc<PreviewRegistry>) -> Self {
        Self {
            store,
            previews,
            active: Mutex::new(None),
        }
    }

    //
    // ──────────────────────────────────────────────────────────
    // Lifecycle
    // ──────────────────────────────────────────────────────────
    //

    /// Starts a fresh draft from the committed store. Any draft already open
    /// is dropped along with its in-flight imports.
    pub async fn open(&self) -> PortfolioData {
        let committed = self.store.snapshot().await;
        let workspace = DraftWorkspace::open(&committed);
        let generation = Uuid::new_v4();

        let previous = self.active.lock().await.replace(ActiveDraft {
            generation,
            workspace,
            slots: BTreeMap::new(),
        });

        if let Some(mut previous) = previous {
            let (abandoned, previews) = previous.abandon_imports();
            self.previews.revoke_all(previews).await;
            info!(abandoned_imports = abandoned, "Replaced open draft");
        }

        info!(generation = %generation, "Opened draft");
        committed
    }

    pub async fn is_open(&self) -> bool {
        self.active.lock().await.is_some()
    }

    pub async fn current(&self) -> Result<PortfolioData, DraftError> {
        let active = self.active.lock().await;
        let draft = active.as_ref().ok_or(DraftError::NotOpen)?;
        Ok(draft.workspace.data().clone())
    }

    /// Replaces the committed store with the draft. When persisting fails the
    /// draft stays open and nothing is abandoned.
    pub async fn commit(&self) -> Result<CommitOutcome, DraftError> {
        let mut active = self.active.lock().await;
        let draft = active.as_ref().ok_or(DraftError::NotOpen)?;

        self.store.replace(draft.workspace.data().clone()).await?;

        let (abandoned, previews) = match active.take() {
            Some(mut draft) => draft.abandon_imports(),
            None => (0, Vec::new()),
        };
        drop(active);
        self.previews.revoke_all(previews).await;

        info!(abandoned_imports = abandoned, "Committed draft");
        Ok(CommitOutcome {
            abandoned_imports: abandoned,
        })
    }

    /// Returns whether a draft was open.
    pub async fn discard(&self) -> bool {
        let Some(mut draft) = self.active.lock().await.take() else {
            return false;
        };

        let (abandoned, previews) = draft.abandon_imports();
        self.previews.revoke_all(previews).await;

        info!(abandoned_imports = abandoned, "Discarded draft");
        true
    }

    //
    // ──────────────────────────────────────────────────────────
    // Edits
    // ──────────────────────────────────────────────────────────
    //

    async fn edit<F, R>(&self, apply: F) -> Result<R, DraftError>
    where
        F: FnOnce(&mut DraftWorkspace) -> Result<R, WorkspaceError>,
    {
        let mut active = self.active.lock().await;
        let draft = active.as_mut().ok_or(DraftError::NotOpen)?;
        Ok(apply(&mut draft.workspace)?)
    }

    pub async fn set_field(&self, field: DraftField) -> Result<(), DraftError> {
        self.edit(|ws| ws.set_field(field)).await
    }

    pub async fn add_item(&self, collection: Collection) -> Result<String, DraftError> {
        let id = self.edit(|ws| ws.add_item(collection)).await?;
        debug!(collection = %collection, id = %id, "Added draft item");
        Ok(id)
    }

    pub async fn remove_item(&self, collection: Collection, id: &str) -> Result<bool, DraftError> {
        self.edit(|ws| Ok(ws.remove_item(collection, id))).await
    }

    pub async fn update_item(
        &self,
        collection: Collection,
        id: &str,
        edit: ItemEdit,
    ) -> Result<bool, DraftError> {
        self.edit(|ws| ws.update_item(collection, id, edit)).await
    }

    pub async fn add_category(&self, label: &str) -> Result<bool, DraftError> {
        self.edit(|ws| Ok(ws.add_category(label))).await
    }

    pub async fn remove_category(&self, label: &str) -> Result<bool, DraftError> {
        self.edit(|ws| Ok(ws.remove_category(label))).await
    }

    //
    // ──────────────────────────────────────────────────────────
    // Imports
    // ──────────────────────────────────────────────────────────
    //

    /// Marks the slot pending. A pending import already on the slot is
    /// superseded and will be abandoned when it completes.
    pub async fn begin_import(
        &self,
        target: AssetTarget,
        preview: Option<Uuid>,
    ) -> Result<ImportHandle, DraftError> {
        let mut active = self.active.lock().await;
        let draft = active.as_mut().ok_or(DraftError::NotOpen)?;

        if !target.exists_in(draft.workspace.data()) {
            return Err(DraftError::UnknownTarget(target));
        }

        let handle = ImportHandle::new(draft.generation, target.clone());
        let superseded = draft.slots.insert(
            target.clone(),
            SlotState::Pending {
                handle: handle.clone(),
                preview,
            },
        );
        drop(active);

        if let Some(SlotState::Pending { handle, preview }) = superseded {
            handle.cancel();
            if let Some(id) = preview {
                self.previews.revoke(id).await;
            }
            debug!(slot = %target, "Superseded pending import");
        }

        Ok(handle)
    }

    /// Applies the encoded value if `handle` still owns its slot in the open
    /// draft. Otherwise the result is dropped.
    pub async fn complete_import(
        &self,
        handle: &ImportHandle,
        result: Result<String, String>,
    ) -> ImportCompletion {
        let mut active = self.active.lock().await;
        let target = handle.target();

        let Some(draft) = active
            .as_mut()
            .filter(|d| d.generation == handle.generation() && !handle.is_cancelled())
        else {
            debug!(slot = %target, "Import finished after its draft closed");
            return ImportCompletion::Abandoned;
        };

        let owns_slot = matches!(
            draft.slots.get(target),
            Some(SlotState::Pending { handle: pending, .. }) if pending.id() == handle.id()
        );
        if !owns_slot {
            return ImportCompletion::Abandoned;
        }

        match result {
            Ok(encoded) => {
                draft.slots.remove(target);
                if target.apply(draft.workspace.data_mut(), encoded) {
                    info!(slot = %target, "Applied imported asset");
                    ImportCompletion::Applied
                } else {
                    warn!(slot = %target, "Project removed before import finished");
                    ImportCompletion::TargetMissing
                }
            }
            Err(reason) => {
                warn!(slot = %target, reason = %reason, "Asset import failed");
                draft.slots.insert(target.clone(), SlotState::Failed { reason });
                ImportCompletion::Failed
            }
        }
    }

    pub async fn slot_statuses(&self) -> Result<Vec<SlotView>, DraftError> {
        let active = self.active.lock().await;
        let draft = active.as_ref().ok_or(DraftError::NotOpen)?;

        Ok(draft
            .slots
            .iter()
            .map(|(slot, state)| SlotView {
                slot: slot.clone(),
                status: match state {
                    SlotState::Pending { preview, .. } => SlotStatus::Pending {
                        preview_url: preview.map(PreviewRegistry::url_for),
                    },
                    SlotState::Failed { reason } => SlotStatus::Failed {
                        reason: reason.clone(),
                    },
                },
            })
            .collect())
    }
}
