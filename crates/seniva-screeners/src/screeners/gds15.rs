//! GDS-15: Geriatric Depression Scale, short form.
//! Fifteen yes/no items; the score is the count of depression-indicating
//! answers, total 0-15.

use seniva_core::models::interpretation::Severity;
use seniva_core::models::response::ResponseValue;

use crate::scoring::{AnswerOption, Band, Question, count_affirmative};

pub const NAME: &str = "Geriatric Depression Scale (GDS-15)";

pub const MAX_SCORE: i64 = 15;

pub const REFERENCE: &str = "Sheikh, J. I., & Yesavage, J. A. (1986). \
Geriatric Depression Scale (GDS): Recent evidence and development of a shorter version. \
Clinical Gerontologist, 5(1-2), 165-173.";

/// Count of affirmative answers: the literal value 1 or the literal string
/// "yes". The form keys each item so that 1 is its depression indicator.
pub fn score(responses: &[ResponseValue]) -> i64 {
    count_affirmative(responses)
}

pub const BANDS: &[Band] = &[
    Band {
        min: 0,
        max: 4,
        level: "normal",
        severity: Severity::None,
        color: "#4caf50",
        emoji: "😊",
        message: "Your answers are in the usual range.",
        recommendation: "No action needed. Keep up your routines and your contact \
            with the people around you.",
    },
    Band {
        min: 5,
        max: 9,
        level: "mild",
        severity: Severity::Mild,
        color: "#ffc107",
        emoji: "😐",
        message: "Your answers suggest mild signs of depression.",
        recommendation: "Consider mentioning how you have been feeling at your next \
            doctor visit.",
    },
    Band {
        min: 10,
        max: 15,
        level: "moderate-severe",
        severity: Severity::Severe,
        color: "#f44336",
        emoji: "😢",
        message: "Your answers suggest moderate to severe signs of depression.",
        recommendation: "Please make an appointment with your doctor to talk about \
            these results.",
    },
];

// Items 1, 5, 7, 11, and 13 are reverse-keyed: answering "No" is the
// depression indicator, so their "No" option carries the value 1.
const YES_KEYED: &[AnswerOption] = &[
    AnswerOption {
        label: "Yes",
        value: 1,
    },
    AnswerOption {
        label: "No",
        value: 0,
    },
];

const NO_KEYED: &[AnswerOption] = &[
    AnswerOption {
        label: "Yes",
        value: 0,
    },
    AnswerOption {
        label: "No",
        value: 1,
    },
];

/// Choose the answer that best describes how you have felt over the past
/// week.
pub const QUESTIONS: &[Question] = &[
    Question {
        text: "Are you basically satisfied with your life?",
        options: NO_KEYED,
    },
    Question {
        text: "Have you dropped many of your activities and interests?",
        options: YES_KEYED,
    },
    Question {
        text: "Do you feel that your life is empty?",
        options: YES_KEYED,
    },
    Question {
        text: "Do you often get bored?",
        options: YES_KEYED,
    },
    Question {
        text: "Are you in good spirits most of the time?",
        options: NO_KEYED,
    },
    Question {
        text: "Are you afraid that something bad is going to happen to you?",
        options: YES_KEYED,
    },
    Question {
        text: "Do you feel happy most of the time?",
        options: NO_KEYED,
    },
    Question {
        text: "Do you often feel helpless?",
        options: YES_KEYED,
    },
    Question {
        text: "Do you prefer to stay at home, rather than going out and doing new \
            things?",
        options: YES_KEYED,
    },
    Question {
        text: "Do you feel you have more problems with memory than most people?",
        options: YES_KEYED,
    },
    Question {
        text: "Do you think it is wonderful to be alive now?",
        options: NO_KEYED,
    },
    Question {
        text: "Do you feel pretty worthless the way you are now?",
        options: YES_KEYED,
    },
    Question {
        text: "Do you feel full of energy?",
        options: NO_KEYED,
    },
    Question {
        text: "Do you feel that your situation is hopeless?",
        options: YES_KEYED,
    },
    Question {
        text: "Do you think that most people are better off than you are?",
        options: YES_KEYED,
    },
];
