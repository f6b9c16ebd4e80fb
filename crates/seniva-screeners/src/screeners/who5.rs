//! WHO-5: World Health Organization Well-Being Index.
//! Five items rated 0-5 over the last two weeks; the raw 0-25 sum is
//! rescaled to 0-100. Unlike the other screeners, higher is healthier.

use seniva_core::models::interpretation::Severity;
use seniva_core::models::response::ResponseValue;

use crate::scoring::{AnswerOption, Band, Question, sum_points};

pub const NAME: &str = "WHO-5 Well-Being Index";

pub const MAX_SCORE: i64 = 100;

pub const REFERENCE: &str = "Topp, C. W., Østergaard, S. D., Søndergaard, S., & Bech, P. (2015). \
The WHO-5 Well-Being Index: A systematic review of the literature. \
Psychotherapy and Psychosomatics, 84(3), 167-176.";

/// Raw 0-25 sum of the five item values, rescaled to 0-100. The rescale is
/// unchecked `i64` arithmetic; the caller owns response magnitudes.
pub fn score(responses: &[ResponseValue]) -> i64 {
    4 * sum_points(responses)
}

// Declared high-to-low: on this scale a high score is the healthy one.
pub const BANDS: &[Band] = &[
    Band {
        min: 50,
        max: 100,
        level: "good",
        severity: Severity::None,
        color: "#4caf50",
        emoji: "😊",
        message: "Your well-being looks good.",
        recommendation: "Keep doing what works for you.",
    },
    Band {
        min: 28,
        max: 49,
        level: "low",
        severity: Severity::Mild,
        color: "#ffc107",
        emoji: "😐",
        message: "Your well-being is lower than usual.",
        recommendation: "More of the activities and company you enjoy can lift \
            well-being. Consider repeating this check in two weeks.",
    },
    Band {
        min: 0,
        max: 27,
        level: "poor",
        severity: Severity::Severe,
        color: "#f44336",
        emoji: "😢",
        message: "Your well-being is low.",
        recommendation: "Please talk with your doctor about how you have been \
            feeling; low well-being over more than two weeks deserves attention.",
    },
];

const TIME: &[AnswerOption] = &[
    AnswerOption {
        label: "All of the time",
        value: 5,
    },
    AnswerOption {
        label: "Most of the time",
        value: 4,
    },
    AnswerOption {
        label: "More than half of the time",
        value: 3,
    },
    AnswerOption {
        label: "Less than half of the time",
        value: 2,
    },
    AnswerOption {
        label: "Some of the time",
        value: 1,
    },
    AnswerOption {
        label: "At no time",
        value: 0,
    },
];

/// Over the last two weeks, how much of the time...
pub const QUESTIONS: &[Question] = &[
    Question {
        text: "I have felt cheerful and in good spirits",
        options: TIME,
    },
    Question {
        text: "I have felt calm and relaxed",
        options: TIME,
    },
    Question {
        text: "I have felt active and vigorous",
        options: TIME,
    },
    Question {
        text: "I woke up feeling fresh and rested",
        options: TIME,
    },
    Question {
        text: "My daily life has been filled with things that interest me",
        options: TIME,
    },
];
