use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::modules::portfolio::application::domain::entities::PortfolioData;
use crate::modules::portfolio::application::ports::outgoing::{
    KeyValueStore, KeyValueStoreError,
};

pub const PORTFOLIO_DATA_KEY: &str = "portfolio_data";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to serialize portfolio data: {0}")]
    Serialization(String),

    #[error(transparent)]
    Storage(#[from] KeyValueStoreError),
}

/// The committed, persisted portfolio. Loaded once at startup; every write
/// serializes the whole aggregate under `PORTFOLIO_DATA_KEY`.
pub struct PortfolioStore {
    storage: Arc<dyn KeyValueStore>,
    committed: RwLock<PortfolioData>,
}

impl PortfolioStore {
    /// Never fails: anything unreadable falls back to the built-in content.
    pub async fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let committed = match storage.get(PORTFOLIO_DATA_KEY).await {
            Ok(Some(blob)) => match serde_json::from_str::<PortfolioData>(&blob) {
                Ok(data) => {
                    info!(bytes = blob.len(), "Loaded saved portfolio data");
                    data
                }
                Err(e) => {
                    error!(error = %e, "Failed to parse saved portfolio data, using defaults");
                    PortfolioData::default()
                }
            },
            Ok(None) => {
                info!("No saved portfolio data found, using defaults");
                PortfolioData::default()
            }
            Err(e) => {
                error!(error = %e, "Failed to read saved portfolio data, using defaults");
                PortfolioData::default()
            }
        };

        Self::with_data(storage, committed)
    }

    pub fn with_data(storage: Arc<dyn KeyValueStore>, data: PortfolioData) -> Self {
        Self {
            storage,
            committed: RwLock::new(data),
        }
    }

    pub async fn snapshot(&self) -> PortfolioData {
        self.committed.read().await.clone()
    }

    /// Full replacement: nothing from the previous value survives.
    /// The committed value only changes once the blob is persisted.
    pub async fn replace(&self, data: PortfolioData) -> Result<(), StoreError> {
        let mut committed = self.committed.write().await;
        self.persist(&data).await?;
        *committed = data;
        Ok(())
    }

    /// Clone, mutate, persist, swap. Writers are serialized by the lock.
    pub async fn update<F, R>(&self, mutate: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut PortfolioData) -> R,
    {
        let mut committed = self.committed.write().await;
        let mut next = committed.clone();
        let result = mutate(&mut next);
        self.persist(&next).await?;
        *committed = next;
        Ok(result)
    }

    pub async fn check_storage(&self) -> Result<(), StoreError> {
        self.storage.get(PORTFOLIO_DATA_KEY).await?;
        Ok(())
    }

    async fn persist(&self, data: &PortfolioData) -> Result<(), StoreError> {
        let blob =
            serde_json::to_string(data).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.storage.set(PORTFOLIO_DATA_KEY, &blob).await?;
        debug!(bytes = blob.len(), "Persisted portfolio data");
        Ok(())
    }
}
