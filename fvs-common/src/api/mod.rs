//! Shared API types
//!
//! Request/response bodies exchanged between the survey page (or any other
//! client) and the submission gateway.

pub mod types;

pub use types::{ErrorBody, SubmitAck, SurveyInfo};

/// Path of the submission gateway
pub const SUBMIT_PATH: &str = "/api/submit";

/// Generic 400 message; no detail about the rejection is returned
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Generic 500 message; the cause is only logged server-side
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
