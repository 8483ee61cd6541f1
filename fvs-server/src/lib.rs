//! fvs-server library - face validity survey service
//!
//! Serves the survey page and the insert-only submission gateway.

use axum::Router;
use fvs_common::SurveyConfig;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// `Forms-data` database pool
    pub db: SqlitePool,
    /// Active survey, fixed for the lifetime of the process
    pub survey: Arc<SurveyConfig>,
    /// Survey page, rendered once from `survey`
    pub index_html: Arc<str>,
}

impl AppState {
    pub fn new(db: SqlitePool, survey: SurveyConfig) -> Self {
        let index_html = api::ui::render_index(&survey).into();
        Self {
            db,
            survey: Arc::new(survey),
            index_html,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let api = Router::new()
        .route(fvs_common::api::SUBMIT_PATH, post(api::submit_form))
        .route("/api/survey", get(api::get_survey));

    let pages = Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .merge(api::health_routes());

    Router::new()
        .merge(api)
        .merge(pages)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
