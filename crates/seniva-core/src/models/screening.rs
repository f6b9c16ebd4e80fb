use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::interpretation::Interpretation;
use super::response::ResponseValue;

/// The result of scoring one completed questionnaire: what the caller
/// renders on the result page and stores alongside the raw responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    pub questionnaire: String,
    pub name: String,
    pub score: i64,
    pub max_score: i64,
    pub interpretation: Interpretation,
}

/// A stored screening: one user's completed questionnaire with its outcome,
/// kept verbatim for history views and clinical review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningRecord {
    pub id: Uuid,
    pub questionnaire: String,
    pub responses: Vec<ResponseValue>,
    pub score: i64,
    pub max_score: i64,
    pub interpretation: Interpretation,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl ScreeningRecord {
    /// Build a record from an outcome and the raw responses it was computed
    /// from, stamping identity and timestamps.
    pub fn new(outcome: ScreeningOutcome, responses: Vec<ResponseValue>) -> Self {
        let now = jiff::Timestamp::now();
        ScreeningRecord {
            id: Uuid::new_v4(),
            questionnaire: outcome.questionnaire,
            responses,
            score: outcome.score,
            max_score: outcome.max_score,
            interpretation: outcome.interpretation,
            created_at: now,
            updated_at: now,
        }
    }
}
