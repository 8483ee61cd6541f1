//! HTTP API handlers for fvs-server

pub mod health;
pub mod submit;
pub mod survey;
pub mod ui;

pub use health::health_routes;
pub use submit::submit_form;
pub use survey::get_survey;
pub use ui::{serve_app_js, serve_index};
