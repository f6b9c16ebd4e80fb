use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenerError {
    #[error("unknown questionnaire type: {0}")]
    UnknownQuestionnaire(String),

    #[error("score {score} is outside [0, {max_score}] for {name}")]
    InvalidScore {
        name: &'static str,
        score: i64,
        max_score: i64,
    },
}
