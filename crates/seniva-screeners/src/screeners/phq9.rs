//! PHQ-9: Patient Health Questionnaire, nine-item depression module.
//! Nine items rated 0-3 over the last two weeks; total 0-27.

use seniva_core::models::interpretation::Severity;
use seniva_core::models::response::ResponseValue;

use crate::scoring::{AnswerOption, Band, Question, sum_points};

pub const NAME: &str = "Patient Health Questionnaire (PHQ-9)";

pub const MAX_SCORE: i64 = 27;

pub const REFERENCE: &str = "Kroenke, K., Spitzer, R. L., & Williams, J. B. W. (2001). \
The PHQ-9: Validity of a brief depression severity measure. \
Journal of General Internal Medicine, 16(9), 606-613.";

/// Sum of the nine item values.
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
        emoji: "😊",
        message: "Your answers suggest minimal signs of low mood.",
        recommendation: "Keep doing the things that keep you well: regular activity, \
            good sleep, and time with people you enjoy.",
    },
    Band {
        min: 5,
        max: 9,
        level: "mild",
        severity: Severity::Mild,
        color: "#ffc107",
        emoji: "🙂",
        message: "Your answers suggest mild low mood.",
        recommendation: "Gentle daily activity and staying in touch with friends or \
            family often helps. Consider repeating this check in two weeks.",
    },
    Band {
        min: 10,
        max: 14,
        level: "moderate",
        severity: Severity::Moderate,
        color: "#ff9800",
        emoji: "😐",
        message: "Your answers suggest moderate low mood.",
        recommendation: "Consider discussing how you have been feeling with your \
            doctor or nurse, especially if it has lasted more than two weeks.",
    },
    Band {
        min: 15,
        max: 19,
        level: "moderately-severe",
        severity: Severity::Severe,
        color: "#f44336",
        emoji: "😟",
        message: "Your answers suggest moderately severe low mood.",
        recommendation: "Please make an appointment with your doctor to talk about \
            these results.",
    },
    Band {
        min: 20,
        max: 27,
        level: "severe",
        severity: Severity::Critical,
        color: "#b71c1c",
        emoji: "😢",
        message: "Your answers suggest severe low mood.",
        recommendation: "Please contact your doctor or care team as soon as possible \
            and share these results with them.",
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

/// Over the last two weeks, how often have you been bothered by any of the
/// following problems?
pub const QUESTIONS: &[Question] = &[
    Question {
        text: "Little interest or pleasure in doing things",
        options: FREQUENCY,
    },
    Question {
        text: "Feeling down, depressed, or hopeless",
        options: FREQUENCY,
    },
    Question {
        text: "Trouble falling or staying asleep, or sleeping too much",
        options: FREQUENCY,
    },
    Question {
        text: "Feeling tired or having little energy",
        options: FREQUENCY,
    },
    Question {
        text: "Poor appetite or overeating",
        options: FREQUENCY,
    },
    Question {
        text: "Feeling bad about yourself, or that you are a failure or have let \
            yourself or your family down",
        options: FREQUENCY,
    },
    Question {
        text: "Trouble concentrating on things, such as reading the newspaper or \
            watching television",
        options: FREQUENCY,
    },
    Question {
        text: "Moving or speaking so slowly that other people could have noticed, \
            or being so fidgety or restless that you have been moving around a lot \
            more than usual",
        options: FREQUENCY,
    },
    Question {
        text: "Thoughts that you would be better off dead or of hurting yourself \
            in some way",
        options: FREQUENCY,
    },
];
