#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetEncodeError {
    #[error("Failed to encode asset: {0}")]
    EncodeFailed(String),
}

/// Turns raw file bytes into the text value stored in the portfolio.
/// Called on the blocking pool.
pub trait AssetEncoder: Send + Sync {
    fn encode(&self, mime: &str, bytes: &[u8]) -> Result<String, AssetEncodeError>;
}
