use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::modules::auth::application::domain::session_token::{SessionToken, SESSION_TOKEN_KEY};
use crate::modules::auth::application::ports::incoming::use_cases::{
    AdminLogoutUseCase, AdminSessionError, AdminSessionUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::KeyValueStore;

/// Checks and clears the session marker. Backs both the bearer check on
/// admin routes and logout.
pub struct AdminSessionService {
    session: Arc<dyn KeyValueStore>,
}

impl AdminSessionService {
    pub fn new(session: Arc<dyn KeyValueStore>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl AdminSessionUseCase for AdminSessionService {
    async fn authorize(&self, token: &str) -> Result<bool, AdminSessionError> {
        let stored = self
            .session
            .get(SESSION_TOKEN_KEY)
            .await
            .map_err(|e| AdminSessionError::StoreError(e.to_string()))?;

        let authorized = stored
            .as_deref()
            .and_then(SessionToken::parse)
            .is_some_and(|stored| stored.as_str() == token);

        if !authorized {
            debug!("Rejected admin session token");
        }
        Ok(authorized)
    }
}

#[async_trait]
impl AdminLogoutUseCase for AdminSessionService {
    async fn execute(&self) -> Result<(), AdminSessionError> {
        self.session
            .remove(SESSION_TOKEN_KEY)
            .await
            .map_err(|e| AdminSessionError::StoreError(e.to_string()))?;
        info!("Admin session closed");
        Ok(())
    }
}
