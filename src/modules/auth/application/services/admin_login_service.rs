use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::{debug, error, info, warn};

use crate::modules::auth::application::domain::gate::{
    ceil_secs, AccessGate, FailureOutcome, GatePolicy, GateRejection, GateStatus,
};
use crate::modules::auth::application::domain::session_token::{SessionToken, SESSION_TOKEN_KEY};
use crate::modules::auth::application::ports::incoming::use_cases::{
    AdminLoginError, AdminLoginRequest, AdminLoginUseCase,
};
use crate::modules::auth::application::ports::outgoing::{SecretVerifier, SecretVerifierError};
use crate::modules::portfolio::application::ports::outgoing::KeyValueStore;

pub struct AdminLoginService {
    gate: Arc<Mutex<AccessGate>>,
    verifier: Arc<dyn SecretVerifier>,
    session: Arc<dyn KeyValueStore>,
}

impl AdminLoginService {
    pub fn new(
        policy: GatePolicy,
        verifier: Arc<dyn SecretVerifier>,
        session: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            gate: Arc::new(Mutex::new(AccessGate::new(policy))),
            verifier,
            session,
        }
    }
}

#[async_trait]
impl AdminLoginUseCase for AdminLoginService {
    async fn execute(&self, request: AdminLoginRequest) -> Result<SessionToken, AdminLoginError> {
        // Held across the comparison so attempts are judged one at a time.
        let mut gate = self.gate.lock().await;

        if let Err(rejection) = gate.ensure_accepting(Instant::now()) {
            return Err(match rejection {
                GateRejection::LockedOut { retry_after } => {
                    debug!("Login attempt ignored during lockout");
                    AdminLoginError::LockedOut {
                        retry_after_secs: ceil_secs(retry_after),
                    }
                }
                GateRejection::VerificationInProgress => AdminLoginError::VerificationInProgress,
            });
        }

        let matched = match self.verifier.verify(request.secret()).await {
            Ok(matched) => matched,
            Err(SecretVerifierError::NotConfigured) => {
                warn!("Login attempted but no admin secret is configured");
                return Err(AdminLoginError::NotConfigured);
            }
            Err(e) => {
                error!(error = %e, "Secret verification failed");
                return Err(AdminLoginError::VerifierError(e.to_string()));
            }
        };

        if !matched {
            return Err(match gate.record_failure(Instant::now()) {
                FailureOutcome::Retry { remaining } => {
                    warn!(remaining_attempts = remaining, "Admin login failed");
                    AdminLoginError::InvalidSecret {
                        remaining_attempts: remaining,
                    }
                }
                FailureOutcome::LockedOut { retry_after } => {
                    warn!(
                        lockout_secs = retry_after.as_secs(),
                        "Admin gate locked after repeated failures"
                    );
                    AdminLoginError::LockedOut {
                        retry_after_secs: ceil_secs(retry_after),
                    }
                }
            });
        }

        gate.begin_verification();
        let policy = *gate.policy();
        drop(gate);

        // Runs detached so a dropped request cannot leave the gate verifying.
        let sequence = tokio::spawn(run_verification(
            Arc::clone(&self.gate),
            Arc::clone(&self.session),
            policy,
        ));

        match sequence.await {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "Verification task failed");
                self.gate.lock().await.abort_verification();
                Err(AdminLoginError::SessionStoreError(e.to_string()))
            }
        }
    }

    async fn status(&self) -> GateStatus {
        self.gate.lock().await.status(Instant::now())
    }
}

async fn run_verification(
    gate: Arc<Mutex<AccessGate>>,
    session: Arc<dyn KeyValueStore>,
    policy: GatePolicy,
) -> Result<SessionToken, AdminLoginError> {
    for _ in 0..policy.verify_steps.max(1) {
        sleep(policy.step_interval()).await;
        if let Some(progress) = gate.lock().await.advance() {
            debug!(progress, "Verifying admin access");
        }
    }

    let token = SessionToken::issue();
    if let Err(e) = session.set(SESSION_TOKEN_KEY, token.as_str()).await {
        error!(error = %e, "Failed to store admin session token");
        gate.lock().await.abort_verification();
        return Err(AdminLoginError::SessionStoreError(e.to_string()));
    }

    gate.lock().await.complete();
    info!("Admin panel unlocked");
    Ok(token)
}
