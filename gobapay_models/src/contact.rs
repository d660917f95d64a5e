use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use thiserror::Error;

use crate::{email_address::EmailAddress, macros::required_trimmed};

/// General international phone shape: an optional leading `+` followed by 7
/// to 15 digits, with common separators permitted between them.
pub static PHONE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?(?:[\s().-]*\d){7,15}[\s().-]*$").unwrap());

required_trimmed!(SubmitterName);
required_trimmed!(Location);
required_trimmed!(BusinessName);
required_trimmed!(BusinessCategory);

#[nutype(
    validate(regex = PHONE_NUMBER_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct PhoneNumber(String);

#[nutype(
    validate(predicate = |value| !value.is_empty()),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct CallTime(String);

#[nutype(
    validate(len_char_max = 500),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionMessage(String);

/// The first rule a submission violates. `Display` is the exact message
/// returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionRejection {
    #[error("Name is required and cannot be empty.")]
    Name,
    #[error("A valid phone number is required.")]
    Phone,
    #[error("Date and Time of call is required")]
    CallTime,
    #[error("A valid email address is required.")]
    Email,
    #[error("Location is required and cannot be empty.")]
    Location,
    #[error("Business name is required and cannot be empty.")]
    BusinessName,
    #[error("Business category is required and cannot be empty.")]
    BusinessCategory,
    #[error("Message cannot exceed 500 characters.")]
    Message,
}

/// Raw fields of a callback request, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackFields {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub call_time: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
}

/// Raw fields of a business proposal, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProposalFields {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub business_name: Option<String>,
    pub business_category: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackSubmission {
    pub name: SubmitterName,
    pub phone: PhoneNumber,
    pub call_time: CallTime,
    pub location: Location,
    pub message: Option<SubmissionMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalSubmission {
    pub name: SubmitterName,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
    pub business_name: BusinessName,
    pub business_category: BusinessCategory,
    pub location: Location,
    pub message: Option<SubmissionMessage>,
}

impl CallbackSubmission {
    /// Checks run in a fixed order and the first failure wins, so a
    /// submission violating several rules always reports the same error.
    pub fn validate(fields: CallbackFields) -> Result<Self, SubmissionRejection> {
        let name = require(fields.name, SubmissionRejection::Name)?;
        let phone = require(fields.phone, SubmissionRejection::Phone)?;
        let call_time = require(fields.call_time, SubmissionRejection::CallTime)?;
        let location = require(fields.location, SubmissionRejection::Location)?;
        let message = optional_message(fields.message)?;

        Ok(Self {
            name,
            phone,
            call_time,
            location,
            message,
        })
    }
}

impl ProposalSubmission {
    pub fn validate(fields: ProposalFields) -> Result<Self, SubmissionRejection> {
        let name = require(fields.name, SubmissionRejection::Name)?;
        let phone = require(fields.phone, SubmissionRejection::Phone)?;
        let email = fields
            .email
            .and_then(|value| value.parse::<EmailAddress>().ok())
            .ok_or(SubmissionRejection::Email)?;
        let location = require(fields.location, SubmissionRejection::Location)?;
        let business_name = require(fields.business_name, SubmissionRejection::BusinessName)?;
        let business_category =
            require(fields.business_category, SubmissionRejection::BusinessCategory)?;
        let message = optional_message(fields.message)?;

        Ok(Self {
            name,
            phone,
            email,
            business_name,
            business_category,
            location,
            message,
        })
    }
}

fn require<T>(
    field: Option<String>,
    rejection: SubmissionRejection,
) -> Result<T, SubmissionRejection>
where
    T: TryFrom<String>,
{
    field
        .and_then(|value| T::try_from(value).ok())
        .ok_or(rejection)
}

fn optional_message(
    message: Option<String>,
) -> Result<Option<SubmissionMessage>, SubmissionRejection> {
    message
        .map(SubmissionMessage::try_from)
        .transpose()
        .map_err(|_| SubmissionRejection::Message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn callback_fields() -> CallbackFields {
        CallbackFields {
            name: Some("Jane Doe".into()),
            phone: Some("+14155552671".into()),
            call_time: Some("2024-05-01T10:00".into()),
            location: Some("Lagos".into()),
            message: None,
        }
    }

    fn proposal_fields() -> ProposalFields {
        ProposalFields {
            name: Some("Jane Doe".into()),
            phone: Some("+14155552671".into()),
            email: Some("jane.doe@example.com".into()),
            business_name: Some("Doe Ventures".into()),
            business_category: Some("Logistics".into()),
            location: Some("Lagos".into()),
            message: Some("Looking forward to working together.".into()),
        }
    }

    #[test]
    fn callback_ok() {
        let submission = CallbackSubmission::validate(callback_fields()).unwrap();

        assert_eq!(*submission.name, "Jane Doe");
        assert_eq!(*submission.phone, "+14155552671");
        assert_eq!(*submission.call_time, "2024-05-01T10:00");
        assert_eq!(*submission.location, "Lagos");
        assert_eq!(submission.message, None);
    }

    #[test]
    fn proposal_ok() {
        let submission = ProposalSubmission::validate(proposal_fields()).unwrap();

        assert_eq!(submission.email.as_str(), "jane.doe@example.com");
        assert_eq!(*submission.business_name, "Doe Ventures");
        assert_eq!(*submission.business_category, "Logistics");
        assert_eq!(
            submission.message.as_deref().map(String::as_str),
            Some("Looking forward to working together.")
        );
    }

    #[test]
    fn untrimmed_values_are_kept() {
        let submission = CallbackSubmission::validate(CallbackFields {
            name: Some("  Jane Doe  ".into()),
            location: Some(" Lagos ".into()),
            ..callback_fields()
        })
        .unwrap();

        assert_eq!(*submission.name, "  Jane Doe  ");
        assert_eq!(*submission.location, " Lagos ");
    }

    #[test]
    fn missing_or_blank_name() {
        for name in [None, Some("".into()), Some("   ".into())] {
            let result = CallbackSubmission::validate(CallbackFields {
                name,
                ..callback_fields()
            });
            assert_eq!(result, Err(SubmissionRejection::Name));
        }
    }

    #[test]
    fn invalid_phone() {
        for phone in [None, Some("".into()), Some("abc".into()), Some("+1".into())] {
            let result = CallbackSubmission::validate(CallbackFields {
                phone,
                ..callback_fields()
            });
            assert_eq!(result, Err(SubmissionRejection::Phone));
        }
    }

    #[test]
    fn phone_shapes() {
        for phone in [
            "+14155552671",
            "(415) 555-2671",
            "+1-415-555-2671",
            "0803 123 4567",
            "08031234567",
        ] {
            assert!(PHONE_NUMBER_REGEX.is_match(phone), "{phone} should match");
        }
        for phone in ["abc", "123456", "+1 (415) JUNK", "----", "+123456789012345678"] {
            assert!(!PHONE_NUMBER_REGEX.is_match(phone), "{phone} should not match");
        }
    }

    #[test]
    fn missing_call_time() {
        for call_time in [None, Some("".into())] {
            let result = CallbackSubmission::validate(CallbackFields {
                call_time,
                ..callback_fields()
            });
            assert_eq!(result, Err(SubmissionRejection::CallTime));
        }
    }

    #[test]
    fn missing_location() {
        let result = CallbackSubmission::validate(CallbackFields {
            location: Some("  ".into()),
            ..callback_fields()
        });
        assert_eq!(result, Err(SubmissionRejection::Location));
    }

    #[test]
    fn invalid_proposal_email() {
        for email in [None, Some("".into()), Some("not-an-email".into())] {
            let result = ProposalSubmission::validate(ProposalFields {
                email,
                ..proposal_fields()
            });
            assert_eq!(result, Err(SubmissionRejection::Email));
        }
    }

    #[test]
    fn missing_business_fields() {
        let result = ProposalSubmission::validate(ProposalFields {
            business_name: None,
            ..proposal_fields()
        });
        assert_eq!(result, Err(SubmissionRejection::BusinessName));

        let result = ProposalSubmission::validate(ProposalFields {
            business_category: Some(" ".into()),
            ..proposal_fields()
        });
        assert_eq!(result, Err(SubmissionRejection::BusinessCategory));
    }

    #[test]
    fn message_length_bound() {
        let result = CallbackSubmission::validate(CallbackFields {
            message: Some("a".repeat(500)),
            ..callback_fields()
        });
        assert!(result.is_ok());

        let result = CallbackSubmission::validate(CallbackFields {
            message: Some("a".repeat(501)),
            ..callback_fields()
        });
        assert_eq!(result, Err(SubmissionRejection::Message));
    }

    #[test]
    fn overlong_message_rejected_even_with_other_defects() {
        // The message bound is checked last, so other violations win first;
        // but with every required field valid, the bound alone rejects.
        let result = ProposalSubmission::validate(ProposalFields {
            message: Some("b".repeat(501)),
            ..proposal_fields()
        });
        assert_eq!(result, Err(SubmissionRejection::Message));
    }

    #[test]
    fn first_violation_wins() {
        // Empty name and invalid phone: the name error is always reported.
        let result = CallbackSubmission::validate(CallbackFields {
            name: Some("".into()),
            phone: Some("abc".into()),
            ..callback_fields()
        });
        assert_eq!(result, Err(SubmissionRejection::Name));

        // Invalid phone and invalid email: the phone error is reported.
        let result = ProposalSubmission::validate(ProposalFields {
            phone: Some("abc".into()),
            email: Some("not-an-email".into()),
            ..proposal_fields()
        });
        assert_eq!(result, Err(SubmissionRejection::Phone));

        // Invalid email and missing location: the email error is reported.
        let result = ProposalSubmission::validate(ProposalFields {
            email: Some("not-an-email".into()),
            location: None,
            ..proposal_fields()
        });
        assert_eq!(result, Err(SubmissionRejection::Email));
    }

    #[test]
    fn newtypes_validate_on_deserialize() {
        assert!(serde_json::from_str::<SubmissionMessage>("\"hello\"").is_ok());
        assert!(serde_json::from_str::<SubmissionMessage>(&format!("\"{}\"", "a".repeat(501)))
            .is_err());
        assert!(serde_json::from_str::<PhoneNumber>("\"+14155552671\"").is_ok());
        assert!(serde_json::from_str::<PhoneNumber>("\"abc\"").is_err());
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            SubmissionRejection::Name.to_string(),
            "Name is required and cannot be empty."
        );
        assert_eq!(
            SubmissionRejection::Phone.to_string(),
            "A valid phone number is required."
        );
        assert_eq!(
            SubmissionRejection::CallTime.to_string(),
            "Date and Time of call is required"
        );
        assert_eq!(
            SubmissionRejection::Email.to_string(),
            "A valid email address is required."
        );
        assert_eq!(
            SubmissionRejection::Location.to_string(),
            "Location is required and cannot be empty."
        );
        assert_eq!(
            SubmissionRejection::Message.to_string(),
            "Message cannot exceed 500 characters."
        );
    }
}
