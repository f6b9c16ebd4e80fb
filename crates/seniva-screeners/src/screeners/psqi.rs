//! PSQI: Pittsburgh Sleep Quality Index, simplified form.
//! Seven items rated 0-3 over the past month, summed directly; total 0-21.
//! The published instrument derives seven component scores from nineteen
//! items; this form asks one question per component and keeps the 0-21
//! scale.

use seniva_core::models::interpretation::Severity;
use seniva_core::models::response::ResponseValue;

use crate::scoring::{AnswerOption, Band, Question, sum_points};

pub const NAME: &str = "Pittsburgh Sleep Quality Index (PSQI)";

pub const MAX_SCORE: i64 = 21;

pub const REFERENCE: &str = "Buysse, D. J., Reynolds, C. F., Monk, T. H., Berman, S. R., \
& Kupfer, D. J. (1989). The Pittsburgh Sleep Quality Index: A new instrument for \
psychiatric practice and research. Psychiatry Research, 28(2), 193-213.";

/// Sum of the seven item values.
pub fn score(responses: &[ResponseValue]) -> i64 {
    sum_points(responses)
}

pub const BANDS: &[Band] = &[
    Band {
        min: 0,
        max: 5,
        level: "good",
        severity: Severity::None,
        color: "#4caf50",
        emoji: "😴",
        message: "Your sleep quality looks good.",
        recommendation: "No action needed. Keep your regular sleep rhythm.",
    },
    Band {
        min: 6,
        max: 10,
        level: "poor",
        severity: Severity::Mild,
        color: "#ffc107",
        emoji: "😕",
        message: "Your sleep quality looks poor.",
        recommendation: "A steady bedtime, less caffeine in the afternoon, and some \
            daylight activity often improve sleep.",
    },
    Band {
        min: 11,
        max: 21,
        level: "severe",
        severity: Severity::Severe,
        color: "#f44336",
        emoji: "😞",
        message: "Your answers suggest serious sleep difficulties.",
        recommendation: "Please discuss your sleep with your doctor; persistent poor \
            sleep is worth treating.",
    },
];

const FREQUENCY: &[AnswerOption] = &[
    AnswerOption {
        label: "Not during the past month",
        value: 0,
    },
    AnswerOption {
        label: "Less than once a week",
        value: 1,
    },
    AnswerOption {
        label: "Once or twice a week",
        value: 2,
    },
    AnswerOption {
        label: "Three or more times a week",
        value: 3,
    },
];

const QUALITY: &[AnswerOption] = &[
    AnswerOption {
        label: "Very good",
        value: 0,
    },
    AnswerOption {
        label: "Fairly good",
        value: 1,
    },
    AnswerOption {
        label: "Fairly bad",
        value: 2,
    },
    AnswerOption {
        label: "Very bad",
        value: 3,
    },
];

const DURATION: &[AnswerOption] = &[
    AnswerOption {
        label: "More than 7 hours",
        value: 0,
    },
    AnswerOption {
        label: "6 to 7 hours",
        value: 1,
    },
    AnswerOption {
        label: "5 to 6 hours",
        value: 2,
    },
    AnswerOption {
        label: "Less than 5 hours",
        value: 3,
    },
];

const PROBLEM: &[AnswerOption] = &[
    AnswerOption {
        label: "No problem at all",
        value: 0,
    },
    AnswerOption {
        label: "Only a very slight problem",
        value: 1,
    },
    AnswerOption {
        label: "Somewhat of a problem",
        value: 2,
    },
    AnswerOption {
        label: "A very big problem",
        value: 3,
    },
];

/// The following questions relate to your usual sleep habits during the
/// past month.
pub const QUESTIONS: &[Question] = &[
    Question {
        text: "How would you rate your sleep quality overall?",
        options: QUALITY,
    },
    Question {
        text: "How often have you had trouble falling asleep within 30 minutes?",
        options: FREQUENCY,
    },
    Question {
        text: "How many hours of actual sleep have you been getting at night?",
        options: DURATION,
    },
    Question {
        text: "How often have you woken up in the middle of the night or early \
            morning?",
        options: FREQUENCY,
    },
    Question {
        text: "How often have you taken medicine to help you sleep?",
        options: FREQUENCY,
    },
    Question {
        text: "How often have you had trouble staying awake while eating, reading, \
            or during other daily activities?",
        options: FREQUENCY,
    },
    Question {
        text: "How much of a problem has it been for you to keep up enough \
            enthusiasm to get things done?",
        options: PROBLEM,
    },
];
