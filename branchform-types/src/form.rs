use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{FormError, FormId, Question, QuestionId};

/// A form: an ordered list of questions plus display metadata.
///
/// Authored order is the navigation order whenever no branching rule fires.
/// A form is presentation-agnostic: it can be rendered one question at a time,
/// as a single page, or driven by a scripted respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: FormId,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// All questions in authored order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Form {
    /// Create a new form with the given questions.
    pub fn new(id: impl Into<FormId>, title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            questions,
        }
    }

    /// Set the description shown above the first question.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parse a form document and check its structural invariants.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let form: Self = serde_json::from_str(json)?;
        form.validate()?;
        Ok(form)
    }

    /// Serialize the form back into a JSON document.
    pub fn to_json(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that question ids are unique in the form and option ids are
    /// unique within each question.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id()) {
                return Err(FormError::DuplicateQuestion(question.id().clone()));
            }

            let mut options = HashSet::new();
            for option in question.options() {
                if !options.insert(&option.id) {
                    return Err(FormError::DuplicateOption {
                        question: question.id().clone(),
                        option: option.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Authored position of a question.
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == id)
    }

    /// Check if the form has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
