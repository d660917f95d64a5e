use std::sync::LazyLock;

use gobapay_core_contact_contracts::{ContactService, ContactSubmitError};
use gobapay_email_contracts::{ContentType, Email, EmailService};
use gobapay_models::{
    contact::{CallbackFields, CallbackSubmission, ProposalFields, ProposalSubmission},
    email_address::EmailAddressWithName,
};
use tracing::info;

mod html;

const CALLBACK_SUBJECT: &str = "New Callback Request";
const PROPOSAL_SUBJECT: &str = "New Proposal Request";

/// Inboxes that receive every forwarded submission.
pub static RECIPIENTS: LazyLock<[EmailAddressWithName; 2]> = LazyLock::new(|| {
    ["vivimarny@gmail.com", "onyeweketerence@gmail.com"]
        .map(|address| address.parse().expect("recipient address is well-formed"))
});

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email> {
    email: Email,
}

impl<Email> ContactServiceImpl<Email> {
    pub fn new(email: Email) -> Self {
        Self { email }
    }
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn submit_callback(&self, fields: CallbackFields) -> Result<(), ContactSubmitError> {
        let submission = CallbackSubmission::validate(fields)?;

        self.dispatch(Email {
            recipients: RECIPIENTS.to_vec(),
            subject: CALLBACK_SUBJECT.into(),
            body: html::callback_body(&submission),
            content_type: ContentType::Html,
            reply_to: None,
        })
        .await
    }

    async fn submit_proposal(&self, fields: ProposalFields) -> Result<(), ContactSubmitError> {
        let submission = ProposalSubmission::validate(fields)?;

        // Reply-To lets the recipients answer the submitter directly.
        let reply_to = submission
            .email
            .clone()
            .with_name((*submission.name).clone());

        self.dispatch(Email {
            recipients: RECIPIENTS.to_vec(),
            subject: PROPOSAL_SUBJECT.into(),
            body: html::proposal_body(&submission),
            content_type: ContentType::Html,
            reply_to: Some(reply_to),
        })
        .await
    }
}

impl<EmailS> ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn dispatch(&self, email: Email) -> Result<(), ContactSubmitError> {
        let delivery = self.email.send(email).await?;

        if !delivery.accepted {
            return Err(ContactSubmitError::Send);
        }

        info!(response = %delivery.response, "email sent");
        Ok(())
    }
}
