//! Scripted respondent for running forms without user interaction.
//!
//! `ScriptedRespondent` answers questions from a pre-defined table keyed by
//! question id. This is useful for testing forms and their branching paths.
//!
//! # Example
//!
//! ```rust
//! use branchform::{Answers, Form, Question, QuestionKind, ScriptedRespondent, TextQuestion};
//! use branchform::run_session;
//!
//! let form = Form::new(
//!     "contact",
//!     "Contact",
//!     vec![
//!         Question::new("name", "Name:", QuestionKind::Text(TextQuestion::new())).required(),
//!         Question::new("phone", "Phone:", QuestionKind::Text(TextQuestion::new())),
//!     ],
//! );
//!
//! let answers: Answers = run_session(
//!     &form,
//!     &ScriptedRespondent::new().with_answer("name", "Alice"),
//! )
//! .unwrap();
//!
//! assert_eq!(answers.get_text(&"name".into()).unwrap(), "Alice");
//! assert!(!answers.contains(&"phone".into()));
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{AnswerValue, Answers, Question, QuestionId, Respondent};

/// A respondent that returns pre-configured answers.
///
/// Optional questions without a scripted answer are skipped. Every question
/// presented is recorded, so tests can assert on the path that was taken.
#[derive(Debug, Default)]
pub struct ScriptedRespondent {
    answers: HashMap<QuestionId, AnswerValue>,
    asked: Mutex<Vec<QuestionId>>,
}

impl Clone for ScriptedRespondent {
    fn clone(&self) -> Self {
        Self {
            answers: self.answers.clone(),
            asked: Mutex::new(self.asked_log().clone()),
        }
    }
}

/// Error type for ScriptedRespondent.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("No scripted answer for required question: {0}")]
    MissingAnswer(QuestionId),
}

impl ScriptedRespondent {
    /// Create a new respondent with no answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an answer for a given question.
    pub fn with_answer(mut self, id: impl Into<QuestionId>, value: impl Into<AnswerValue>) -> Self {
        self.answers.insert(id.into(), value.into());
        self
    }

    /// Add a text answer.
    pub fn with_text(self, id: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        self.with_answer(id, AnswerValue::Text(value.into()))
    }

    /// Add a list answer (multi-choice selections, rankings).
    pub fn with_list<S: Into<String>>(
        self,
        id: impl Into<QuestionId>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        self.with_answer(
            id,
            AnswerValue::List(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Questions presented so far, in order.
    pub fn asked(&self) -> Vec<QuestionId> {
        self.asked_log().clone()
    }

    // The log is append-only, so a poisoned lock still holds a usable list.
    fn asked_log(&self) -> MutexGuard<'_, Vec<QuestionId>> {
        self.asked.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Respondent for ScriptedRespondent {
    type Error = ScriptError;

    fn respond(
        &self,
        question: &Question,
        _answers: &Answers,
    ) -> Result<Option<AnswerValue>, Self::Error> {
        self.asked_log().push(question.id().clone());

        match self.answers.get(question.id()) {
            Some(value) => Ok(Some(value.clone())),
            None if question.is_required() => Err(ScriptError::MissingAnswer(question.id().clone())),
            None => Ok(None),
        }
    }
}
