use async_trait::async_trait;

use crate::modules::auth::application::domain::gate::GateStatus;
use crate::modules::auth::application::domain::session_token::SessionToken;

// ========================= Request =========================

#[derive(Debug, Clone)]
pub struct AdminLoginRequest {
    secret: String,
}

impl AdminLoginRequest {
    /// Any string is an attempt; an empty one simply never matches.
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

// ========================= Error =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminLoginError {
    #[error("Too many failed attempts, retry in {retry_after_secs}s")]
    LockedOut { retry_after_secs: u64 },

    #[error("A verification is already running")]
    VerificationInProgress,

    #[error("Invalid secret, {remaining_attempts} attempts remaining")]
    InvalidSecret { remaining_attempts: u32 },

    #[error("Admin access is not configured")]
    NotConfigured,

    #[error("Secret verification failed: {0}")]
    VerifierError(String),

    #[error("Failed to store session: {0}")]
    SessionStoreError(String),
}

// ========================= Use case =========================

#[async_trait]
pub trait AdminLoginUseCase: Send + Sync {
    /// Runs one login attempt through the gate. Resolves only after the
    /// verification sequence has finished.
    async fn execute(&self, request: AdminLoginRequest) -> Result<SessionToken, AdminLoginError>;

    async fn status(&self) -> GateStatus;
}
