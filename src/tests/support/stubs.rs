use std::sync::{mpsc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::modules::auth::application::ports::outgoing::{SecretVerifier, SecretVerifierError};
use crate::modules::multimedia::application::ports::outgoing::{AssetEncodeError, AssetEncoder};
use crate::modules::portfolio::adapter::outgoing::MemoryKeyValueStore;
use crate::modules::portfolio::application::ports::outgoing::{
    KeyValueStore, KeyValueStoreError,
};

// ========================================================================
// Secret verifier
// ========================================================================

/// Compares in the clear, skipping the Argon2 cost in tests.
pub struct PlainSecretVerifier {
    secret: Option<String>,
}

impl PlainSecretVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: Some(secret.to_string()),
        }
    }

    pub fn unconfigured() -> Self {
        Self { secret: None }
    }
}

#[async_trait]
impl SecretVerifier for PlainSecretVerifier {
    async fn verify(&self, candidate: &str) -> Result<bool, SecretVerifierError> {
        match &self.secret {
            Some(secret) => Ok(secret == candidate),
            None => Err(SecretVerifierError::NotConfigured),
        }
    }
}

// ========================================================================
// Key-value stores
// ========================================================================

pub struct FailingKeyValueStore;

#[async_trait]
impl KeyValueStore for FailingKeyValueStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, KeyValueStoreError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), KeyValueStoreError> {
        Err(KeyValueStoreError::WriteFailed("disk full".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), KeyValueStoreError> {
        Err(KeyValueStoreError::WriteFailed("disk full".to_string()))
    }
}

/// Parks every `set` until the test calls `release`.
pub struct BlockingSessionStore {
    inner: MemoryKeyValueStore,
    entered: Notify,
    released: Notify,
}

impl BlockingSessionStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryKeyValueStore::new(),
            entered: Notify::new(),
            released: Notify::new(),
        }
    }

    pub async fn wait_until_entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.released.notify_one();
    }
}

#[async_trait]
impl KeyValueStore for BlockingSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        self.entered.notify_one();
        self.released.notified().await;
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        self.inner.remove(key).await
    }
}

// ========================================================================
// Encoders
// ========================================================================

/// Blocks each encode until a value is sent on the returned channel.
pub struct GatedEncoder {
    gate: Mutex<mpsc::Receiver<()>>,
}

impl GatedEncoder {
    pub fn new() -> (Self, mpsc::Sender<()>) {
        let (tx, rx) = mpsc::channel();
        (Self { gate: Mutex::new(rx) }, tx)
    }
}

impl AssetEncoder for GatedEncoder {
    fn encode(&self, mime: &str, _bytes: &[u8]) -> Result<String, AssetEncodeError> {
        let gate = self.gate.lock().expect("gate poisoned");
        gate.recv()
            .map_err(|e| AssetEncodeError::EncodeFailed(e.to_string()))?;
        Ok(format!("data:{mime};base64,stub"))
    }
}

pub struct FailingEncoder;

impl AssetEncoder for FailingEncoder {
    fn encode(&self, _mime: &str, _bytes: &[u8]) -> Result<String, AssetEncodeError> {
        Err(AssetEncodeError::EncodeFailed("corrupt input".to_string()))
    }
}
