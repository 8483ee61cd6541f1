//! Form state for one survey session
//!
//! Holds the responder details and the rating matrix while the expert fills
//! the form in. Nothing here is persisted; the state is serialized into a
//! [`SubmissionPayload`] only when a submission starts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::survey::RatingCategory;
use crate::{Error, Result};

pub mod session;

pub use session::{StatusKind, SubmitPhase, SubmitStatus, SubmitTransport, SurveySession, TransportError};

/// Message shown when local validation blocks a submission
pub const INCOMPLETE_FORM_MESSAGE: &str = "Please complete all ratings before submitting.";

/// Details about the expert filling in the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponderInfo {
    pub name: String,
    pub experience: String,
    pub qualifications: String,
    pub expertise_reason: String,
}

impl ResponderInfo {
    pub fn get(&self, field: ResponderField) -> &str {
        match field {
            ResponderField::Name => &self.name,
            ResponderField::Experience => &self.experience,
            ResponderField::Qualifications => &self.qualifications,
            ResponderField::ExpertiseReason => &self.expertise_reason,
        }
    }

    /// True when every field has non-whitespace content
    pub fn is_complete(&self) -> bool {
        ResponderField::ALL
            .iter()
            .all(|field| !self.get(*field).trim().is_empty())
    }
}

/// Addressable fields of [`ResponderInfo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponderField {
    Name,
    Experience,
    Qualifications,
    ExpertiseReason,
}

impl ResponderField {
    pub const ALL: [ResponderField; 4] = [
        ResponderField::Name,
        ResponderField::Experience,
        ResponderField::Qualifications,
        ResponderField::ExpertiseReason,
    ];

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            ResponderField::Name => "Name",
            ResponderField::Experience => "Years of Experience in the Field",
            ResponderField::Qualifications => "Professional Qualifications",
            ResponderField::ExpertiseReason => {
                "Why do you consider yourself an expert in assessing face validity?"
            }
        }
    }

    /// JSON key inside `responderInfo`
    pub fn key(&self) -> &'static str {
        match self {
            ResponderField::Name => "name",
            ResponderField::Experience => "experience",
            ResponderField::Qualifications => "qualifications",
            ResponderField::ExpertiseReason => "expertiseReason",
        }
    }
}

/// A single score on the 1-4 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(Error::InvalidInput(format!(
                "Rating must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scores for one question; categories stay `None` until rated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clarity: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplicity: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambiguity: Option<Rating>,
}

impl QuestionRating {
    pub fn get(&self, category: RatingCategory) -> Option<Rating> {
        match category {
            RatingCategory::Clarity => self.clarity,
            RatingCategory::Simplicity => self.simplicity,
            RatingCategory::Relevance => self.relevance,
            RatingCategory::Ambiguity => self.ambiguity,
        }
    }

    fn slot(&mut self, category: RatingCategory) -> &mut Option<Rating> {
        match category {
            RatingCategory::Clarity => &mut self.clarity,
            RatingCategory::Simplicity => &mut self.simplicity,
            RatingCategory::Relevance => &mut self.relevance,
            RatingCategory::Ambiguity => &mut self.ambiguity,
        }
    }

    /// True when all four categories are set
    pub fn is_complete(&self) -> bool {
        RatingCategory::ALL.iter().all(|c| self.get(*c).is_some())
    }
}

/// Question index -> ratings, serialized as `{"0": {...}, "1": {...}}`
pub type RatingMatrix = BTreeMap<usize, QuestionRating>;

/// Body sent to `POST /api/submit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub responder_info: ResponderInfo,
    pub ratings: RatingMatrix,
}

/// In-progress answers for a survey with a fixed number of questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    question_count: usize,
    responder: ResponderInfo,
    ratings: RatingMatrix,
}

impl FormState {
    /// Empty form for `question_count` questions
    pub fn new(question_count: usize) -> Self {
        Self {
            question_count,
            responder: ResponderInfo::default(),
            ratings: RatingMatrix::new(),
        }
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn responder(&self) -> &ResponderInfo {
        &self.responder
    }

    pub fn ratings(&self) -> &RatingMatrix {
        &self.ratings
    }

    /// Overwrite one responder field; any value is accepted
    pub fn set_responder_field(&mut self, field: ResponderField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ResponderField::Name => self.responder.name = value,
            ResponderField::Experience => self.responder.experience = value,
            ResponderField::Qualifications => self.responder.qualifications = value,
            ResponderField::ExpertiseReason => self.responder.expertise_reason = value,
        }
    }

    /// Record a score for one (question, category) pair
    ///
    /// Other categories of the same question are left as they are.
    pub fn set_rating(&mut self, question_index: usize, category: RatingCategory, value: u8) -> Result<()> {
        if question_index >= self.question_count {
            return Err(Error::InvalidInput(format!(
                "Question index {} out of range (survey has {} questions)",
                question_index, self.question_count
            )));
        }
        let rating = Rating::try_from(value)?;

        *self
            .ratings
            .entry(question_index)
            .or_default()
            .slot(category) = Some(rating);

        Ok(())
    }

    /// Current score for a (question, category) pair
    pub fn rating(&self, question_index: usize, category: RatingCategory) -> Option<Rating> {
        self.ratings
            .get(&question_index)
            .and_then(|q| q.get(category))
    }

    /// Completeness check run before any network submission
    pub fn validate(&self) -> bool {
        self.responder.is_complete()
            && (0..self.question_count).all(|i| {
                self.ratings
                    .get(&i)
                    .map(QuestionRating::is_complete)
                    .unwrap_or(false)
            })
    }

    /// Back to the initial empty state
    pub fn reset(&mut self) {
        self.responder = ResponderInfo::default();
        self.ratings.clear();
    }

    /// Snapshot of the current answers in wire form
    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            responder_info: self.responder.clone(),
            ratings: self.ratings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_responder(form: &mut FormState) {
        form.set_responder_field(ResponderField::Name, "Dr. Example");
        form.set_responder_field(ResponderField::Experience, "12");
        form.set_responder_field(ResponderField::Qualifications, "PhD Psychometrics");
        form.set_responder_field(ResponderField::ExpertiseReason, "Designed validated scales");
    }

    fn rate_all(form: &mut FormState, value: u8) {
        for i in 0..form.question_count() {
            for c in RatingCategory::ALL {
                form.set_rating(i, c, value).unwrap();
            }
        }
    }

    #[test]
    fn test_set_rating_then_read_back() {
        let mut form = FormState::new(3);
        form.set_rating(1, RatingCategory::Relevance, 3).unwrap();
        assert_eq!(form.rating(1, RatingCategory::Relevance).map(|r| r.value()), Some(3));
    }

    #[test]
    fn test_set_rating_leaves_other_entries_untouched() {
        let mut form = FormState::new(3);
        form.set_rating(0, RatingCategory::Clarity, 1).unwrap();
        form.set_rating(2, RatingCategory::Ambiguity, 4).unwrap();
        let before = form.clone();

        form.set_rating(0, RatingCategory::Simplicity, 2).unwrap();

        for i in 0..3 {
            for c in RatingCategory::ALL {
                if (i, c) != (0, RatingCategory::Simplicity) {
                    assert_eq!(form.rating(i, c), before.rating(i, c), "({}, {}) changed", i, c);
                }
            }
        }
    }

    #[test]
    fn test_overwriting_same_pair_keeps_last_value() {
        let mut form = FormState::new(1);
        form.set_rating(0, RatingCategory::Clarity, 2).unwrap();
        form.set_rating(0, RatingCategory::Clarity, 4).unwrap();

        assert_eq!(form.rating(0, RatingCategory::Clarity).map(u8::from), Some(4));
        assert_eq!(form.ratings().len(), 1);
    }

    #[test]
    fn test_set_rating_rejects_out_of_range() {
        let mut form = FormState::new(2);
        assert!(form.set_rating(2, RatingCategory::Clarity, 1).is_err());
        assert!(form.set_rating(0, RatingCategory::Clarity, 0).is_err());
        assert!(form.set_rating(0, RatingCategory::Clarity, 5).is_err());
        assert!(form.ratings().is_empty());
    }

    #[test]
    fn test_validate_requires_all_responder_fields() {
        for missing in ResponderField::ALL {
            let mut form = FormState::new(2);
            filled_responder(&mut form);
            rate_all(&mut form, 3);
            form.set_responder_field(missing, "   \t");
            assert!(!form.validate(), "{:?} blank should fail", missing);
        }
    }

    #[test]
    fn test_validate_requires_every_category_of_every_question() {
        let mut form = FormState::new(2);
        filled_responder(&mut form);
        assert!(!form.validate());

        rate_all(&mut form, 2);
        assert!(form.validate());

        let mut partial = FormState::new(2);
        filled_responder(&mut partial);
        for c in RatingCategory::ALL {
            partial.set_rating(0, c, 1).unwrap();
        }
        partial.set_rating(1, RatingCategory::Clarity, 1).unwrap();
        assert!(!partial.validate());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut form = FormState::new(4);
        filled_responder(&mut form);
        rate_all(&mut form, 1);

        form.reset();
        assert_eq!(form, FormState::new(4));

        form.reset();
        assert_eq!(form, FormState::new(4));
    }

    #[test]
    fn test_payload_wire_shape() {
        let mut form = FormState::new(2);
        filled_responder(&mut form);
        form.set_rating(1, RatingCategory::Clarity, 3).unwrap();

        let json = serde_json::to_value(form.payload()).unwrap();
        assert_eq!(json["responderInfo"]["expertiseReason"], "Designed validated scales");
        assert_eq!(json["ratings"], json!({ "1": { "clarity": 3 } }));
    }

    #[test]
    fn test_rating_deserialize_rejects_out_of_scale() {
        assert!(serde_json::from_value::<Rating>(json!(4)).is_ok());
        assert!(serde_json::from_value::<Rating>(json!(7)).is_err());
    }
}
