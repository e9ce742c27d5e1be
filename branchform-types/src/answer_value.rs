use serde::{Deserialize, Serialize};

/// A single answer collected from a respondent.
///
/// This is the value stored in `Answers` for each answered question. The shape
/// depends on the question kind: choice and text questions store `Text`,
/// multi-select and ranking questions store `List`, and compound inputs such as
/// dual-field rankings or uploads store `Structured`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A string value (choice text, free text, date, rating).
    Text(String),

    /// An ordered list of strings (multi-choice selections, rankings).
    List(Vec<String>),

    /// Any other JSON-shaped value.
    Structured(serde_json::Value),
}

impl AnswerValue {
    /// Try to get this value as a string reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a structured JSON value.
    pub fn as_structured(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Structured(v) => Some(v),
            _ => None,
        }
    }

    /// Whether the respondent actually provided something.
    ///
    /// Empty strings, empty lists and JSON `null` count as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Structured(v) => v.is_null(),
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::List(_) => "List",
            Self::Structured(_) => "Structured",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<serde_json::Value> for AnswerValue {
    fn from(v: serde_json::Value) -> Self {
        Self::Structured(v)
    }
}
