//! # Face Validity Survey Common Library
//!
//! Shared code for the face validity survey service including:
//! - Survey configuration (question sets, rating categories, themes)
//! - Form state and the client-side submission state machine
//! - API request/response types
//! - Database initialization and the submissions collection
//! - Runtime configuration loading and root folder resolution

pub mod api;
#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod survey;
pub mod time;

pub use error::{Error, Result};
pub use form::{FormState, QuestionRating, Rating, RatingMatrix, ResponderField, ResponderInfo};
pub use survey::{RatingCategory, SurveyConfig, SurveyVariant, Theme};
