use std::future::Future;

use gobapay_models::contact::{CallbackFields, ProposalFields, SubmissionRejection};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Validate a callback request and forward it by email.
    fn submit_callback(
        &self,
        fields: CallbackFields,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;

    /// Validate a business proposal and forward it by email.
    fn submit_proposal(
        &self,
        fields: ProposalFields,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error(transparent)]
    Rejected(#[from] SubmissionRejection),
    #[error("Failed to send email.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit_callback(
        mut self,
        fields: CallbackFields,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit_callback()
            .once()
            .with(mockall::predicate::eq(fields))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_submit_proposal(
        mut self,
        fields: ProposalFields,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit_proposal()
            .once()
            .with(mockall::predicate::eq(fields))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
