use serde::{Deserialize, Serialize};

/// Clinical severity grade attached to an interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Mild,
    Moderate,
    Severe,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Critical => "critical",
        }
    }
}

/// What a score means, ready for display and for storage next to the score.
///
/// Every field is fixed clinical content selected by the matching threshold
/// band; nothing is computed beyond the band lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub level: String,
    pub color: String,
    pub emoji: String,
    pub message: String,
    pub recommendation: String,
    pub severity: Severity,
}
