use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyValueStoreError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage read failed: {0}")]
    ReadFailed(String),

    #[error("Storage write failed: {0}")]
    WriteFailed(String),
}

/// String-keyed text storage. The durable store holds the serialized
/// portfolio blob; the session store holds the admin session marker.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}
