use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SecretVerifierError {
    #[error("No admin secret is configured")]
    NotConfigured,

    #[error("Secret verification failed")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

/// Compares a candidate against the configured admin secret.
#[async_trait]
pub trait SecretVerifier: Send + Sync {
    async fn verify(&self, candidate: &str) -> Result<bool, SecretVerifierError>;
}
