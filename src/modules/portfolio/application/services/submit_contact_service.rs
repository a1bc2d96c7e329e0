use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::portfolio::application::domain::entities::ContactMessage;
use crate::modules::portfolio::application::domain::ids::next_id;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactRequest, SubmitContactUseCase,
};
use crate::modules::portfolio::application::store::PortfolioStore;

/// Public contact form. Writes straight into the committed store, bypassing
/// any open admin draft.
pub struct SubmitContactService {
    store: Arc<PortfolioStore>,
}

impl SubmitContactService {
    pub fn new(store: Arc<PortfolioStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(
        &self,
        request: SubmitContactRequest,
    ) -> Result<ContactMessage, SubmitContactError> {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let message = self
            .store
            .update(|data| {
                let message = ContactMessage {
                    id: next_id(data.messages.iter().map(|m| m.id.as_str())),
                    name: request.name().to_string(),
                    email: request.email().to_string(),
                    subject: request.subject().to_string(),
                    message: request.message().to_string(),
                    timestamp,
                    is_read: false,
                };
                data.messages.insert(0, message.clone());
                message
            })
            .await
            .map_err(|e| SubmitContactError::StoreError(e.to_string()))?;

        info!(message_id = %message.id, subject = %message.subject, "Contact message received");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::application::domain::entities::PortfolioData;
    use crate::tests::support::fixtures::{failing_store, memory_store};

    fn request(name: &str) -> SubmitContactRequest {
        SubmitContactRequest::new(
            name.to_string(),
            "ada@example.com".to_string(),
            None,
            "Hello there".to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_execute_prepends_unread_message() {
        let store = memory_store(PortfolioData::default());
        let service = SubmitContactService::new(store.clone());

        service.execute(request("First")).await.unwrap();
        let second = service.execute(request("Second")).await.unwrap();

        let data = store.snapshot().await;
        assert_eq!(data.messages.len(), 2);
        assert_eq!(data.messages[0].id, second.id);
        assert_eq!(data.messages[0].name, "Second");
        assert!(!data.messages[0].is_read);
        assert_eq!(data.messages[0].subject, "General Inquiry");
        assert_ne!(data.messages[0].id, data.messages[1].id);
    }

    #[tokio::test]
    async fn test_execute_maps_store_error() {
        let service = SubmitContactService::new(failing_store());

        let result = service.execute(request("Ada")).await;

        assert!(matches!(result, Err(SubmitContactError::StoreError(_))));
    }
}
