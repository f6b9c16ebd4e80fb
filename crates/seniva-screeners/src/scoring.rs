//! Shared scoring vocabulary: threshold bands and item catalog types, plus
//! the integer-coercion policy applied to raw form responses.

use seniva_core::models::interpretation::{Interpretation, Severity};
use seniva_core::models::response::ResponseValue;
use serde::Serialize;
use thiserror::Error;

/// One inclusive score range and the fixed clinical content shown for it.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub min: i64,
    pub max: i64,
    pub level: &'static str,
    pub severity: Severity,
    pub color: &'static str,
    pub emoji: &'static str,
    pub message: &'static str,
    pub recommendation: &'static str,
}

impl Band {
    pub fn contains(&self, score: i64) -> bool {
        score >= self.min && score <= self.max
    }

    pub fn interpretation(&self) -> Interpretation {
        Interpretation {
            level: self.level.to_string(),
            color: self.color.to_string(),
            emoji: self.emoji.to_string(),
            message: self.message.to_string(),
            recommendation: self.recommendation.to_string(),
            severity: self.severity,
        }
    }
}

/// First band containing `score`, in declared order. Tables are declared
/// low-to-high, except WHO-5 where higher scores are healthier.
pub(crate) fn band_for(bands: &'static [Band], score: i64) -> Option<&'static Band> {
    bands.iter().find(|band| band.contains(score))
}

/// One answer option as presented by the form: the display label and the
/// point value it submits.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub value: i64,
}

/// One questionnaire item with its fixed answer options.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub text: &'static str,
    pub options: &'static [AnswerOption],
}

/// Integer value of a response. Non-numeric answers score zero, the
/// long-standing behavior of the form layer this subsystem replaced.
pub(crate) fn points(response: &ResponseValue) -> i64 {
    match response.numeric() {
        Some(value) => value,
        None => {
            tracing::warn!(?response, "non-numeric response scored as zero");
            0
        }
    }
}

/// Plain `i64` sum of the coerced values. The arithmetic is unchecked:
/// published forms keep item values in single digits, and the caller owns
/// the magnitude of anything else it passes.
pub(crate) fn sum_points(responses: &[ResponseValue]) -> i64 {
    responses.iter().map(points).sum()
}

/// Number of affirmative answers, for yes/no questionnaires.
pub(crate) fn count_affirmative(responses: &[ResponseValue]) -> i64 {
    responses.iter().filter(|r| r.is_affirmative()).count() as i64
}

/// A non-blocking finding from checking a response set against the item
/// catalog. `index` is the offending item position, or `None` for findings
/// about the set as a whole.
#[derive(Debug, Clone, Serialize, Error)]
#[error("{message}")]
pub struct ResponseWarning {
    pub index: Option<usize>,
    pub message: String,
}
