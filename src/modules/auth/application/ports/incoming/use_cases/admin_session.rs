use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminSessionError {
    #[error("Session storage error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait AdminSessionUseCase: Send + Sync {
    /// True when `token` is the marker stored for the current session.
    async fn authorize(&self, token: &str) -> Result<bool, AdminSessionError>;
}

#[async_trait]
pub trait AdminLogoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), AdminSessionError>;
}
