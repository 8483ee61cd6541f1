//! Submission gateway
//!
//! Accepts any JSON object, stamps it with `submittedAt` and inserts it into
//! the `faceValidity` collection. Rating completeness is the client's job;
//! nothing beyond "is an object" is checked here.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use fvs_common::api::SubmitAck;
use fvs_common::db::insert_submission;
use serde_json::{Map, Value};
use tracing::info;

use crate::error::ApiError;
use crate::AppState;

/// POST /api/submit
pub async fn submit_form(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SubmitAck>, ApiError> {
    let body = body.map_err(ApiError::from_body_rejection)?;
    let document = parse_document(&body)?;

    let id = insert_submission(&state.db, document, fvs_common::time::now()).await?;
    info!("Stored submission {}", id);

    Ok(Json(SubmitAck::new(id.to_string())))
}

/// Body must be a JSON object
///
/// An empty body or a non-object value (including `null` and arrays) is a
/// 400. Bytes that are not JSON at all fall through to the generic 500.
fn parse_document(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BadRequest("empty body".to_string()));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::Internal(format!("unparseable JSON body: {}", e)))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::BadRequest(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
