use std::borrow::Cow;

use serde::Serialize;

pub mod contact;

#[derive(Serialize)]
pub struct ApiError {
    pub error: Cow<'static, str>,
}

#[derive(Serialize)]
pub struct ApiMessage {
    pub message: &'static str,
}
