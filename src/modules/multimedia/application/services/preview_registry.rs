use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

pub const PREVIEW_ROUTE: &str = "/api/admin/previews";

/// Raw bytes of a file being imported, served back so the admin panel can
/// show the file before its encoded form lands in the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub mime: String,
    pub bytes: Arc<Vec<u8>>,
}

#[derive(Default)]
pub struct PreviewRegistry {
    previews: RwLock<HashMap<Uuid, Preview>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url_for(id: Uuid) -> String {
        format!("{PREVIEW_ROUTE}/{id}")
    }

    pub async fn register(&self, mime: &str, bytes: Arc<Vec<u8>>) -> Uuid {
        let id = Uuid::new_v4();
        self.previews.write().await.insert(
            id,
            Preview {
                mime: mime.to_string(),
                bytes,
            },
        );
        debug!(preview_id = %id, "Registered preview");
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<Preview> {
        self.previews.read().await.get(&id).cloned()
    }

    /// Returns whether the preview was still live.
    pub async fn revoke(&self, id: Uuid) -> bool {
        let removed = self.previews.write().await.remove(&id).is_some();
        if removed {
            debug!(preview_id = %id, "Revoked preview");
        }
        removed
    }

    pub async fn revoke_all<I>(&self, ids: I)
    where
        I: IntoIterator<Item = Uuid>,
    {
        let mut previews = self.previews.write().await;
        for id in ids {
            previews.remove(&id);
        }
    }

    pub async fn len(&self) -> usize {
        self.previews.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_get_revoke() {
        let registry = PreviewRegistry::new();
        let id = registry.register("image/png", Arc::new(vec![1, 2, 3])).await;

        let preview = registry.get(id).await.unwrap();
        assert_eq!(preview.mime, "image/png");
        assert_eq!(*preview.bytes, vec![1, 2, 3]);

        assert!(registry.revoke(id).await);
        assert!(!registry.revoke(id).await);
        assert!(registry.get(id).await.is_none());
    }

    #[tokio::test]
    async fn test_revoke_all_drops_every_listed_preview() {
        let registry = PreviewRegistry::new();
        let a = registry.register("image/png", Arc::new(vec![0])).await;
        let b = registry.register("video/mp4", Arc::new(vec![0])).await;
        let c = registry.register("image/gif", Arc::new(vec![0])).await;

        registry.revoke_all([a, b]).await;

        assert_eq!(registry.len().await, 1);
        assert!(registry.get(c).await.is_some());
    }

    #[test]
    fn test_url_for() {
        let id = Uuid::nil();
        assert_eq!(
            PreviewRegistry::url_for(id),
            "/api/admin/previews/00000000-0000-0000-0000-000000000000"
        );
    }
}
