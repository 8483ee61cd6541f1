//! Gateway request/response types

use serde::{Deserialize, Serialize};

use crate::survey::{RatingCategory, SurveyConfig};

/// Successful submission acknowledgement
///
/// # Examples
///
/// ```
/// use fvs_common::api::types::SubmitAck;
///
/// let ack: SubmitAck = serde_json::from_str(r#"{"success":true,"id":"42"}"#).unwrap();
/// assert!(ack.success);
/// assert_eq!(ack.id, "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAck {
    pub success: bool,
    /// Identifier assigned by the storage layer
    pub id: String,
}

impl SubmitAck {
    pub fn new(id: impl Into<String>) -> Self {
        Self { success: true, id: id.into() }
    }
}

/// Error body for 4xx/5xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Active survey configuration as served by `GET /api/survey`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyInfo {
    #[serde(flatten)]
    pub survey: SurveyConfig,
    pub categories: Vec<RatingCategory>,
    pub rating_values: Vec<u8>,
}

impl From<&SurveyConfig> for SurveyInfo {
    fn from(survey: &SurveyConfig) -> Self {
        Self {
            survey: survey.clone(),
            categories: RatingCategory::ALL.to_vec(),
            rating_values: crate::survey::RATING_VALUES.to_vec(),
        }
    }
}
