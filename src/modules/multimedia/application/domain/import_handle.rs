use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use uuid::Uuid;

use super::entities::AssetTarget;

/// One in-flight import, bound to the draft that started it.
/// Clones share the cancellation flag.
#[derive(Debug, Clone)]
pub struct ImportHandle {
    id: Uuid,
    generation: Uuid,
    target: AssetTarget,
    cancelled: Arc<AtomicBool>,
}

impl ImportHandle {
    pub fn new(generation: Uuid, target: AssetTarget) -> Self {
        Self {
            id: Uuid::new_v4(),
            generation,
            target,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn generation(&self) -> Uuid {
        self.generation
    }

    pub fn target(&self) -> &AssetTarget {
        &self.target
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
