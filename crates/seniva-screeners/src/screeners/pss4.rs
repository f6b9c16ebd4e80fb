//! PSS-4: Perceived Stress Scale, four-item form.
//! Four items rated 0-4 over the last month; total 0-16.

use seniva_core::models::interpretation::Severity;
use seniva_core::models::response::ResponseValue;

use crate::scoring::{AnswerOption, Band, Question, sum_points};

pub const NAME: &str = "Perceived Stress Scale (PSS-4)";

pub const MAX_SCORE: i64 = 16;

pub const REFERENCE: &str = "Cohen, S., Kamarck, T., & Mermelstein, R. (1983). \
A global measure of perceived stress. \
Journal of Health and Social Behavior, 24(4), 385-396.";

/// Sum of the four item values.
pub fn score(responses: &[ResponseValue]) -> i64 {
    sum_points(responses)
}

pub const BANDS: &[Band] = &[
    Band {
        min: 0,
        max: 5,
        level: "low",
        severity: Severity::None,
        color: "#4caf50",
        emoji: "😌",
        message: "Your answers suggest a low level of stress.",
        recommendation: "No action needed. Whatever you are doing to stay balanced \
            is working.",
    },
    Band {
        min: 6,
        max: 10,
        level: "moderate",
        severity: Severity::Mild,
        color: "#ffc107",
        emoji: "😐",
        message: "Your answers suggest moderate stress.",
        recommendation: "Short breaks, light exercise, and talking things over with \
            someone you trust can ease the load.",
    },
    Band {
        min: 11,
        max: 16,
        level: "high",
        severity: Severity::Moderate,
        color: "#ff9800",
        emoji: "😫",
        message: "Your answers suggest a high level of stress.",
        recommendation: "Consider discussing what is weighing on you with your \
            doctor or someone close to you.",
    },
];

// Items 2 and 3 are positively worded, so their options are reverse-keyed.
const OFTEN: &[AnswerOption] = &[
    AnswerOption {
        label: "Never",
        value: 0,
    },
    AnswerOption {
        label: "Almost never",
        value: 1,
    },
    AnswerOption {
        label: "Sometimes",
        value: 2,
    },
    AnswerOption {
        label: "Fairly often",
        value: 3,
    },
    AnswerOption {
        label: "Very often",
        value: 4,
    },
];

const OFTEN_REVERSED: &[AnswerOption] = &[
    AnswerOption {
        label: "Never",
        value: 4,
    },
    AnswerOption {
        label: "Almost never",
        value: 3,
    },
    AnswerOption {
        label: "Sometimes",
        value: 2,
    },
    AnswerOption {
        label: "Fairly often",
        value: 1,
    },
    AnswerOption {
        label: "Very often",
        value: 0,
    },
];

pub const QUESTIONS: &[Question] = &[
    Question {
        text: "In the last month, how often have you felt that you were unable to \
            control the important things in your life?",
        options: OFTEN,
    },
    Question {
        text: "In the last month, how often have you felt confident about your \
            ability to handle your personal problems?",
        options: OFTEN_REVERSED,
    },
    Question {
        text: "In the last month, how often have you felt that things were going \
            your way?",
        options: OFTEN_REVERSED,
    },
    Question {
        text: "In the last month, how often have you felt difficulties were piling \
            up so high that you could not overcome them?",
        options: OFTEN,
    },
];
