use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{AnswerValue, QuestionId};

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for question: {0}")]
    Missing(QuestionId),

    #[error("Type mismatch for question '{id}': expected {expected}, got {actual}")]
    TypeMismatch {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers collected from a respondent, keyed by question id.
///
/// The session layer owns and mutates this map; the navigator only ever reads a
/// snapshot of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: HashMap<QuestionId, AnswerValue>,
}

impl Answers {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer, replacing any previous one for the same question.
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: impl Into<AnswerValue>) {
        self.values.insert(id.into(), value.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, id: impl Into<QuestionId>, value: impl Into<AnswerValue>) -> Self {
        self.insert(id, value);
        self
    }

    /// Get the answer for a question.
    pub fn get(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.values.get(id)
    }

    /// Check if a question has an answer.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Check if a question has a non-blank answer.
    pub fn is_answered(&self, id: &QuestionId) -> bool {
        self.get(id).is_some_and(|v| !v.is_blank())
    }

    /// Get an iterator over all id-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.values.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a text answer.
    pub fn get_text(&self, id: &QuestionId) -> Result<&str, AnswerError> {
        match self.get(id) {
            Some(AnswerValue::Text(s)) => Ok(s),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.clone(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Get a list answer.
    pub fn get_list(&self, id: &QuestionId) -> Result<&[String], AnswerError> {
        match self.get(id) {
            Some(AnswerValue::List(items)) => Ok(items),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.clone(),
                expected: "List",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }
}

impl IntoIterator for Answers {
    type Item = (QuestionId, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a QuestionId, &'a AnswerValue);
    type IntoIter = std::collections::hash_map::Iter<'a, QuestionId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K: Into<QuestionId>, V: Into<AnswerValue>> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
