//! Survey configuration
//!
//! The question sets are compiled in. Each [`SurveyVariant`] yields one
//! immutable [`SurveyConfig`] which is built once at startup and shared
//! read-only by every request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Number of questions in every built-in question set
pub const QUESTIONS_PER_SURVEY: usize = 15;

/// Allowed rating values, in display order
pub const RATING_VALUES: [u8; 4] = [1, 2, 3, 4];

/// One of the four face validity criteria every question is scored on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingCategory {
    Clarity,
    Simplicity,
    Relevance,
    Ambiguity,
}

impl RatingCategory {
    /// All categories in display order
    pub const ALL: [RatingCategory; 4] = [
        RatingCategory::Clarity,
        RatingCategory::Simplicity,
        RatingCategory::Relevance,
        RatingCategory::Ambiguity,
    ];

    /// Wire name (lowercase), used as the JSON key inside a question rating
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingCategory::Clarity => "clarity",
            RatingCategory::Simplicity => "simplicity",
            RatingCategory::Relevance => "relevance",
            RatingCategory::Ambiguity => "ambiguity",
        }
    }

    /// Human-readable label shown above the rating buttons
    pub fn label(&self) -> &'static str {
        match self {
            RatingCategory::Clarity => "Clarity",
            RatingCategory::Simplicity => "Simplicity",
            RatingCategory::Relevance => "Relevance",
            RatingCategory::Ambiguity => "Ambiguity",
        }
    }
}

impl fmt::Display for RatingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RatingCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown rating category: {}", s)))
    }
}

/// Color theme of the rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Blue,
    Green,
    Purple,
}

impl Theme {
    /// Accent color for selected buttons and the submit button
    pub fn accent(&self) -> &'static str {
        match self {
            Theme::Blue => "#2563eb",
            Theme::Green => "#16a34a",
            Theme::Purple => "#7c3aed",
        }
    }

    /// Darker shade used for hover states
    pub fn accent_hover(&self) -> &'static str {
        match self {
            Theme::Blue => "#1d4ed8",
            Theme::Green => "#15803d",
            Theme::Purple => "#6d28d9",
        }
    }
}

/// Everything needed to render one survey page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyConfig {
    pub title: String,
    pub intro_text: String,
    pub questions: Vec<String>,
    pub theme: Theme,
}

impl SurveyConfig {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// Built-in question sets
///
/// The three variants share layout and behavior and differ only in their
/// question text and color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurveyVariant {
    #[default]
    SectionA,
    SectionB,
    SectionC,
}

impl SurveyVariant {
    pub const ALL: [SurveyVariant; 3] = [
        SurveyVariant::SectionA,
        SurveyVariant::SectionB,
        SurveyVariant::SectionC,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyVariant::SectionA => "section-a",
            SurveyVariant::SectionB => "section-b",
            SurveyVariant::SectionC => "section-c",
        }
    }

    fn section_letter(&self) -> char {
        match self {
            SurveyVariant::SectionA => 'A',
            SurveyVariant::SectionB => 'B',
            SurveyVariant::SectionC => 'C',
        }
    }

    fn theme(&self) -> Theme {
        match self {
            SurveyVariant::SectionA => Theme::Blue,
            SurveyVariant::SectionB => Theme::Green,
            SurveyVariant::SectionC => Theme::Purple,
        }
    }

    /// Build the immutable page configuration for this variant
    pub fn config(&self) -> SurveyConfig {
        let section = self.section_letter();
        let questions = (1..=QUESTIONS_PER_SURVEY)
            .map(|n| {
                format!(
                    "Section {} - Question {}: This is a sample question for face validity assessment. \
                     Please rate it on the following categories.",
                    section, n
                )
            })
            .collect();

        SurveyConfig {
            title: format!("Face Validity Assessment - Section {}", section),
            intro_text: "Rate each question from 1 (lowest) to 4 (highest) on clarity, simplicity, \
                         relevance and ambiguity. All fields are required."
                .to_string(),
            questions,
            theme: self.theme(),
        }
    }
}

impl fmt::Display for SurveyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SurveyVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SurveyVariant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Config(format!("Unknown survey variant: {}", s)))
    }
}
