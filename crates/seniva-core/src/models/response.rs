use serde::{Deserialize, Serialize};

/// A single questionnaire answer as collected by a web form.
///
/// Forms submit loosely typed values: radio inputs post small integers or
/// the strings "yes"/"no", and anything arriving through JSON may be a
/// number or a string. The value keeps its submitted shape and exposes a
/// best-effort integer view for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl ResponseValue {
    /// Best-effort integer view. Integers pass through and floats truncate
    /// toward zero; strings are parsed as an integer, falling back to a
    /// float parse. Returns `None` for non-numeric text.
    pub fn numeric(&self) -> Option<i64> {
        match self {
            ResponseValue::Int(value) => Some(*value),
            ResponseValue::Float(value) => Some(*value as i64),
            ResponseValue::Text(text) => {
                let trimmed = text.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().map(|value| value as i64))
            }
        }
    }

    /// Whether this answer is the literal value `1` or the literal string
    /// `"yes"`, the two affirmative forms a yes/no item submits. Matching is
    /// exact; no trimming or case folding.
    pub fn is_affirmative(&self) -> bool {
        match self {
            ResponseValue::Int(value) => *value == 1,
            ResponseValue::Float(value) => *value == 1.0,
            ResponseValue::Text(text) => text == "1" || text == "yes",
        }
    }
}

impl From<i64> for ResponseValue {
    fn from(value: i64) -> Self {
        ResponseValue::Int(value)
    }
}

impl From<f64> for ResponseValue {
    fn from(value: f64) -> Self {
        ResponseValue::Float(value)
    }
}

impl From<&str> for ResponseValue {
    fn from(value: &str) -> Self {
        ResponseValue::Text(value.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(value: String) -> Self {
        ResponseValue::Text(value)
    }
}
