use async_trait::async_trait;
use email_address::EmailAddress;

use crate::modules::portfolio::application::domain::entities::ContactMessage;
use crate::modules::portfolio::application::domain::views::DEFAULT_CONTACT_SUBJECT;

// ========================= Request =========================

/// Validated contact form submission.
#[derive(Debug, Clone)]
pub struct SubmitContactRequest {
    name: String,
    email: String,
    subject: String,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactRequestError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Message cannot be empty")]
    EmptyMessage,
}

impl SubmitContactRequest {
    pub fn new(
        name: String,
        email: String,
        subject: Option<String>,
        message: String,
    ) -> Result<Self, SubmitContactRequestError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(SubmitContactRequestError::EmptyName);
        }

        let email = email.trim().to_string();
        if !EmailAddress::is_valid(&email) {
            return Err(SubmitContactRequestError::InvalidEmailFormat);
        }

        let message = message.trim().to_string();
        if message.is_empty() {
            return Err(SubmitContactRequestError::EmptyMessage);
        }

        let subject = subject
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CONTACT_SUBJECT.to_string());

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// ========================= Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Failed to save message: {0}")]
    StoreError(String),
}

// ========================= Use case =========================

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(
        &self,
        request: SubmitContactRequest,
    ) -> Result<ContactMessage, SubmitContactError>;
}
