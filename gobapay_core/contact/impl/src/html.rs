//! Renders the email bodies: one labeled table row per submitted field,
//! matching the layout the recipients already know from the website.

use gobapay_models::contact::{CallbackSubmission, ProposalSubmission, SubmissionMessage};

const NO_MESSAGE_PLACEHOLDER: &str = "No message provided.";

pub(crate) fn callback_body(submission: &CallbackSubmission) -> String {
    table_body(
        "New Callback Request",
        "You have received a new callback request with the following details:",
        &[
            ("Name:", &submission.name),
            ("Phone:", &submission.phone),
            ("Date and Time of Call:", &submission.call_time),
            ("Location:", &submission.location),
            ("Message:", message_or_placeholder(&submission.message)),
        ],
    )
}

pub(crate) fn proposal_body(submission: &ProposalSubmission) -> String {
    table_body(
        "New Proposal Request",
        "You have received a new proposal request with the following details:",
        &[
            ("Name:", &submission.name),
            ("Phone:", &submission.phone),
            ("Email:", submission.email.as_str()),
            ("Business Name:", &submission.business_name),
            ("Business Category:", &submission.business_category),
            ("Location:", &submission.location),
            ("Message:", message_or_placeholder(&submission.message)),
        ],
    )
}

fn message_or_placeholder(message: &Option<SubmissionMessage>) -> &str {
    message
        .as_deref()
        .map(String::as_str)
        .unwrap_or(NO_MESSAGE_PLACEHOLDER)
}

fn table_body(heading: &str, intro: &str, rows: &[(&str, &str)]) -> String {
    let mut table = String::new();
    for (label, value) in rows {
        table.push_str(&format!(
            "<tr>\
             <td style=\"padding: 8px; border: 1px solid #ddd; font-weight: bold;\">{label}</td>\
             <td style=\"padding: 8px; border: 1px solid #ddd;\">{}</td>\
             </tr>",
            escape(value)
        ));
    }

    format!(
        "<div style=\"font-family: Arial, sans-serif; line-height: 1.5; color: #333;\">\
         <h2 style=\"color: #333;\">{heading}</h2>\
         <p style=\"color: #555;\">{intro}</p>\
         <table style=\"width: 100%; border-collapse: collapse;\">{table}</table>\
         <p style=\"color: #555;\">Please contact the user at your earliest convenience.</p>\
         </div>"
    )
}

/// Submitted values reach the recipient's mail client as markup, so every
/// interpolation is escaped.
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
