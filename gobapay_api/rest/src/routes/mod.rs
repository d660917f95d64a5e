use std::borrow::Cow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub mod contact;

fn error(code: StatusCode, error: impl Into<Cow<'static, str>>) -> Response {
    (code, Json(ApiError { error: error.into() })).into_response()
}
