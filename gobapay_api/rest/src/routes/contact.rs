use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use gobapay_core_contact_contracts::{ContactService, ContactSubmitError};

use super::error;
use crate::models::{
    contact::{ApiCallbackSubmission, ApiProposalSubmission},
    ApiMessage,
};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/callback", routing::post(submit_callback))
        .route("/api/proposal", routing::post(submit_proposal))
        .with_state(service)
}

async fn submit_callback(
    service: State<Arc<impl ContactService>>,
    Json(submission): Json<ApiCallbackSubmission>,
) -> Response {
    submit_result(service.submit_callback(submission.into()).await)
}

async fn submit_proposal(
    service: State<Arc<impl ContactService>>,
    Json(submission): Json<ApiProposalSubmission>,
) -> Response {
    submit_result(service.submit_proposal(submission.into()).await)
}

fn submit_result(result: Result<(), ContactSubmitError>) -> Response {
    match result {
        Ok(()) => Json(ApiMessage {
            message: "Email sent successfully",
        })
        .into_response(),
        Err(ContactSubmitError::Rejected(rejection)) => {
            error(StatusCode::BAD_REQUEST, rejection.to_string())
        }
        Err(ContactSubmitError::Send) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
        }
        Err(ContactSubmitError::Other(err)) => {
            tracing::error!("failed to send email: {err}");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
        }
    }
}
