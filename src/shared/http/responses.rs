use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::warn;

use crate::modules::activities::core::errors::ActivityError;
use crate::modules::activities::use_cases::application_error::ApplicationError;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

pub fn message(message: String) -> Response {
    (StatusCode::OK, Json(MessageResponse { message })).into_response()
}

pub fn detail(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDetail {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn application_error(error: ApplicationError) -> Response {
    let status = match &error {
        ApplicationError::Domain(ActivityError::NotFound { .. }) => StatusCode::NOT_FOUND,
        ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
        ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    detail(status, error.to_string())
}

/// A name that cannot be decoded cannot match any activity.
pub fn unknown_activity(rejection: PathRejection) -> Response {
    warn!(reason = %rejection.body_text(), "undecodable activity name");
    application_error(ApplicationError::Domain(ActivityError::NotFound {
        activity: String::new(),
    }))
}
