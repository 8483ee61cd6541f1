//! Active survey configuration

use axum::{extract::State, Json};
use fvs_common::api::SurveyInfo;

use crate::AppState;

/// GET /api/survey
///
/// Title, intro, questions and theme of the running survey plus the rating
/// categories and scale, so non-browser clients can size their form.
pub async fn get_survey(State(state): State<AppState>) -> Json<SurveyInfo> {
    Json(SurveyInfo::from(state.survey.as_ref()))
}
