//! seniva-screeners
//!
//! Clinical screening questionnaires for the Seniva wellness tracker: WHO-5,
//! GDS-15, PHQ-9, GAD-7, PSS-4, and PSQI. Each screener bundles one
//! instrument's scoring formula and threshold bands together with the fixed
//! item catalog the form presents. Pure data and arithmetic; persistence and
//! rendering live in the web layer.

pub mod error;
pub mod scoring;
pub mod screeners;

use seniva_core::models::interpretation::Interpretation;
use seniva_core::models::response::ResponseValue;
use seniva_core::models::screening::ScreeningOutcome;

use error::ScreenerError;
use scoring::{Band, Question, ResponseWarning, band_for};

/// One supported questionnaire. The set is closed: the check-in page offers
/// exactly these six screeners, each reachable through one type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screener {
    Who5,
    Gds15,
    Phq9,
    Gad7,
    Pss4,
    Psqi,
}

impl Screener {
    /// All screeners, in the order the selection page lists them.
    pub const ALL: [Screener; 6] = [
        Screener::Who5,
        Screener::Gds15,
        Screener::Phq9,
        Screener::Gad7,
        Screener::Pss4,
        Screener::Psqi,
    ];

    /// Look up a screener by type code. Matching is case-insensitive; the
    /// canonical form is lowercase.
    pub fn from_code(code: &str) -> Option<Screener> {
        match code.to_lowercase().as_str() {
            "wellbeing" => Some(Screener::Who5),
            "depression" => Some(Screener::Gds15),
            "mood" => Some(Screener::Phq9),
            "anxiety" => Some(Screener::Gad7),
            "stress" => Some(Screener::Pss4),
            "sleep" => Some(Screener::Psqi),
            _ => None,
        }
    }

    /// Canonical type code, as submitted by the check-in form.
    pub fn code(self) -> &'static str {
        match self {
            Screener::Who5 => "wellbeing",
            Screener::Gds15 => "depression",
            Screener::Phq9 => "mood",
            Screener::Gad7 => "anxiety",
            Screener::Pss4 => "stress",
            Screener::Psqi => "sleep",
        }
    }

    /// Display name shown on the selection page and result views.
    pub fn name(self) -> &'static str {
        match self {
            Screener::Who5 => screeners::who5::NAME,
            Screener::Gds15 => screeners::gds15::NAME,
            Screener::Phq9 => screeners::phq9::NAME,
            Screener::Gad7 => screeners::gad7::NAME,
            Screener::Pss4 => screeners::pss4::NAME,
            Screener::Psqi => screeners::psqi::NAME,
        }
    }

    /// Bibliographic reference for the published instrument.
    pub fn reference(self) -> &'static str {
        match self {
            Screener::Who5 => screeners::who5::REFERENCE,
            Screener::Gds15 => screeners::gds15::REFERENCE,
            Screener::Phq9 => screeners::phq9::REFERENCE,
            Screener::Gad7 => screeners::gad7::REFERENCE,
            Screener::Pss4 => screeners::pss4::REFERENCE,
            Screener::Psqi => screeners::psqi::REFERENCE,
        }
    }

    /// Highest score the scale can produce.
    pub fn max_score(self) -> i64 {
        match self {
            Screener::Who5 => screeners::who5::MAX_SCORE,
            Screener::Gds15 => screeners::gds15::MAX_SCORE,
            Screener::Phq9 => screeners::phq9::MAX_SCORE,
            Screener::Gad7 => screeners::gad7::MAX_SCORE,
            Screener::Pss4 => screeners::pss4::MAX_SCORE,
            Screener::Psqi => screeners::psqi::MAX_SCORE,
        }
    }

    /// The fixed items and answer options the form presents.
    pub fn questions(self) -> &'static [Question] {
        match self {
            Screener::Who5 => screeners::who5::QUESTIONS,
            Screener::Gds15 => screeners::gds15::QUESTIONS,
            Screener::Phq9 => screeners::phq9::QUESTIONS,
            Screener::Gad7 => screeners::gad7::QUESTIONS,
            Screener::Pss4 => screeners::pss4::QUESTIONS,
            Screener::Psqi => screeners::psqi::QUESTIONS,
        }
    }

    fn bands(self) -> &'static [Band] {
        match self {
            Screener::Who5 => screeners::who5::BANDS,
            Screener::Gds15 => screeners::gds15::BANDS,
            Screener::Phq9 => screeners::phq9::BANDS,
            Screener::Gad7 => screeners::gad7::BANDS,
            Screener::Pss4 => screeners::pss4::BANDS,
            Screener::Psqi => screeners::psqi::BANDS,
        }
    }

    /// Whether this screener's items are yes/no rather than rated options.
    fn has_yes_no_items(self) -> bool {
        matches!(self, Screener::Gds15)
    }

    /// Compute the raw score for an ordered response set. Pure arithmetic:
    /// no length or range validation, no clamping; non-numeric values score
    /// zero. Sums are unchecked `i64`, so the caller owns the magnitude of
    /// the values it passes.
    pub fn score(self, responses: &[ResponseValue]) -> i64 {
        match self {
            Screener::Who5 => screeners::who5::score(responses),
            Screener::Gds15 => screeners::gds15::score(responses),
            Screener::Phq9 => screeners::phq9::score(responses),
            Screener::Gad7 => screeners::gad7::score(responses),
            Screener::Pss4 => screeners::pss4::score(responses),
            Screener::Psqi => screeners::psqi::score(responses),
        }
    }

    /// Map a score onto this screener's threshold bands. Fails for scores
    /// outside `[0, max_score]`, which a well-formed response set cannot
    /// produce.
    pub fn interpret(self, score: i64) -> Result<Interpretation, ScreenerError> {
        band_for(self.bands(), score)
            .map(Band::interpretation)
            .ok_or(ScreenerError::InvalidScore {
                name: self.name(),
                score,
                max_score: self.max_score(),
            })
    }

    /// Check a response set against the item catalog: the response count,
    /// plus answer values the form never offers. Yes/no items accept their
    /// literal text forms alongside the catalog values. Advisory only;
    /// findings never block scoring.
    pub fn check_responses(self, responses: &[ResponseValue]) -> Vec<ResponseWarning> {
        let questions = self.questions();
        let mut warnings = Vec::new();

        if responses.len() != questions.len() {
            warnings.push(ResponseWarning {
                index: None,
                message: format!(
                    "{}: expected {} responses, got {}",
                    self.name(),
                    questions.len(),
                    responses.len()
                ),
            });
        }

        for (index, (response, question)) in responses.iter().zip(questions).enumerate() {
            if self.has_yes_no_items() {
                // Affirmative literals count one point; "no" and the catalog
                // values count zero. Anything else is unrecognized.
                let recognized = response.is_affirmative()
                    || matches!(response, ResponseValue::Text(text) if text == "no")
                    || response.numeric().is_some_and(|value| {
                        question.options.iter().any(|option| option.value == value)
                    });
                if !recognized {
                    warnings.push(ResponseWarning {
                        index: Some(index),
                        message: format!(
                            "item {}: unrecognized answer does not count toward the score",
                            index + 1
                        ),
                    });
                }
                continue;
            }

            match response.numeric() {
                None => warnings.push(ResponseWarning {
                    index: Some(index),
                    message: format!("item {}: non-numeric answer scores zero", index + 1),
                }),
                Some(value) if !question.options.iter().any(|option| option.value == value) => {
                    warnings.push(ResponseWarning {
                        index: Some(index),
                        message: format!(
                            "item {}: {} is not one of the offered answer values",
                            index + 1,
                            value
                        ),
                    });
                }
                Some(_) => {}
            }
        }

        warnings
    }
}

/// Resolve a type code to its screener.
pub fn resolve(type_code: &str) -> Result<Screener, ScreenerError> {
    Screener::from_code(type_code)
        .ok_or_else(|| ScreenerError::UnknownQuestionnaire(type_code.to_string()))
}

/// The six `(type code, display name)` pairs, in the order the selection
/// page lists them.
pub fn available_types() -> Vec<(&'static str, &'static str)> {
    Screener::ALL
        .iter()
        .map(|screener| (screener.code(), screener.name()))
        .collect()
}

/// Whether a type code resolves to a screener. Agrees exactly with
/// [`resolve`].
pub fn is_valid_type(type_code: &str) -> bool {
    Screener::from_code(type_code).is_some()
}

/// Score and interpret one completed questionnaire.
pub fn score_responses(
    type_code: &str,
    responses: &[ResponseValue],
) -> Result<ScreeningOutcome, ScreenerError> {
    let screener = resolve(type_code)?;
    let score = screener.score(responses);
    let interpretation = screener.interpret(score)?;
    Ok(ScreeningOutcome {
        questionnaire: screener.code().to_string(),
        name: screener.name().to_string(),
        score,
        max_score: screener.max_score(),
        interpretation,
    })
}
