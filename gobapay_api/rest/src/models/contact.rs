use gobapay_models::contact::{CallbackFields, ProposalFields};
use serde::Deserialize;

/// Raw callback form body. Every field deserializes as optional so that a
/// missing key surfaces as a validation error, not a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiCallbackSubmission {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub call_time: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
}

impl From<ApiCallbackSubmission> for CallbackFields {
    fn from(value: ApiCallbackSubmission) -> Self {
        Self {
            name: value.name,
            phone: value.phone,
            call_time: value.call_time,
            location: value.location,
            message: value.message,
        }
    }
}

/// Raw business proposal body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiProposalSubmission {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub business_name: Option<String>,
    pub business_category: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
}

impl From<ApiProposalSubmission> for ProposalFields {
    fn from(value: ApiProposalSubmission) -> Self {
        Self {
            name: value.name,
            phone: value.phone,
            email: value.email,
            business_name: value.business_name,
            business_category: value.business_category,
            location: value.location,
            message: value.message,
        }
    }
}
