use std::future::Future;

use gobapay_models::email_address::EmailAddressWithName;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<Delivery>> + Send;

    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipients: Vec<EmailAddressWithName>,
    pub subject: String,
    pub body: String,
    pub content_type: ContentType,
    pub reply_to: Option<EmailAddressWithName>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Html,
}

/// Acknowledgement of a single send attempt, carrying the transport's
/// informational reply text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub accepted: bool,
    pub response: String,
}

impl Delivery {
    pub fn accepted(response: impl Into<String>) -> Self {
        Self {
            accepted: true,
            response: response.into(),
        }
    }

    pub fn rejected(response: impl Into<String>) -> Self {
        Self {
            accepted: false,
            response: response.into(),
        }
    }
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: anyhow::Result<Delivery>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
