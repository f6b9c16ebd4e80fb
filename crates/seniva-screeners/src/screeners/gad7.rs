//! GAD-7: Generalized Anxiety Disorder scale.
//! Seven items rated 0-3 over the last two weeks; total 0-21.

use seniva_core::models::interpretation::Severity;
use seniva_core::models::response::ResponseValue;

use crate::scoring::{AnswerOption, Band, Question, sum_points};

pub const NAME: &str = "Generalized Anxiety Disorder Scale (GAD-7)";

pub const MAX_SCORE: i64 = 21;

pub const REFERENCE: &str = "Spitzer, R. L., Kroenke, K., Williams, J. B. W., & Löwe, B. (2006). \
A brief measure for assessing generalized anxiety disorder: The GAD-7. \
Archives of Internal Medicine, 166(10), 1092-1097.";

/// Sum of the seven item values.
pub fn score(responses: &[ResponseValue]) -> i64 {
    sum_points(responses)
}

pub const BANDS: &[Band] = &[
    Band {
        min: 0,
        max: 4,
        level: "minimal",
        severity: Severity::None,
        color: "#4caf50",
        emoji: "😌",
        message: "Your answers suggest minimal signs of anxiety.",
        recommendation: "No action needed. Relaxing routines such as short walks or \
            breathing exercises help keep worry low.",
    },
    Band {
        min: 5,
        max: 9,
        level: "mild",
        severity: Severity::Mild,
        color: "#ffc107",
        emoji: "🙂",
        message: "Your answers suggest mild anxiety.",
        recommendation: "Try calming activities you enjoy and repeat this check in a \
            couple of weeks.",
    },
    Band {
        min: 10,
        max: 14,
        level: "moderate",
        severity: Severity::Moderate,
        color: "#ff9800",
        emoji: "😟",
        message: "Your answers suggest moderate anxiety.",
        recommendation: "Consider discussing your worries with your doctor or nurse.",
    },
    Band {
        min: 15,
        max: 21,
        level: "severe",
        severity: Severity::Severe,
        color: "#f44336",
        emoji: "😰",
        message: "Your answers suggest severe anxiety.",
        recommendation: "Please talk to your doctor about these results soon.",
    },
];

const FREQUENCY: &[AnswerOption] = &[
    AnswerOption {
        label: "Not at all",
        value: 0,
    },
    AnswerOption {
        label: "Several days",
        value: 1,
    },
    AnswerOption {
        label: "More than half the days",
        value: 2,
    },
    AnswerOption {
        label: "Nearly every day",
        value: 3,
    },
];

/// Over the last two weeks, how often have you been bothered by the
/// following problems?
pub const QUESTIONS: &[Question] = &[
    Question {
        text: "Feeling nervous, anxious, or on edge",
        options: FREQUENCY,
    },
    Question {
        text: "Not being able to stop or control worrying",
        options: FREQUENCY,
    },
    Question {
        text: "Worrying too much about different things",
        options: FREQUENCY,
    },
    Question {
        text: "Trouble relaxing",
        options: FREQUENCY,
    },
    Question {
        text: "Being so restless that it is hard to sit still",
        options: FREQUENCY,
    },
    Question {
        text: "Becoming easily annoyed or irritable",
        options: FREQUENCY,
    },
    Question {
        text: "Feeling afraid, as if something awful might happen",
        options: FREQUENCY,
    },
];
