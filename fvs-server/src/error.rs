//! Gateway error type
//!
//! Callers only ever see the two generic messages; the detail carried by
//! each variant is logged here and goes no further.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fvs_common::api::{ErrorBody, INTERNAL_ERROR_MESSAGE, INVALID_BODY_MESSAGE};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body missing or not a JSON object (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Body could not be read, e.g. over the request size limit
    #[error("Unreadable body ({status}): {detail}")]
    UnreadableBody { status: StatusCode, detail: String },

    /// Anything else (500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Storage or other shared-library failure (500)
    #[error("Common error: {0}")]
    Common(#[from] fvs_common::Error),
}

impl ApiError {
    /// Keep axum's status for a failed body read but answer in our JSON shape
    pub fn from_body_rejection(rejection: BytesRejection) -> Self {
        ApiError::UnreadableBody {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(_) => {
                warn!("Rejected submission: {}", self);
                (StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE)
            }
            ApiError::UnreadableBody { status, .. } if status.is_client_error() => {
                warn!("Rejected submission: {}", self);
                (*status, INVALID_BODY_MESSAGE)
            }
            ApiError::UnreadableBody { .. } | ApiError::Internal(_) | ApiError::Common(_) => {
                error!("Error submitting form: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
