//! A single respondent's pass through a form.

use std::collections::HashSet;

use crate::navigator::{self, Navigation};
use crate::{
    AnswerValue, Answers, Form, Question, QuestionId, Receipt, Respondent, ResponseSink,
    SessionError,
};

/// Owns the answers of one response in progress.
///
/// The answer map only grows: changing an earlier answer may hide questions
/// that were already answered, and those answers are kept and submitted as-is.
/// Navigation is recomputed from scratch on every query.
#[derive(Debug, Clone)]
pub struct Session<'f> {
    form: &'f Form,
    answers: Answers,
    skipped: HashSet<QuestionId>,
}

impl<'f> Session<'f> {
    /// Start an empty session.
    pub fn new(form: &'f Form) -> Self {
        Self::with_answers(form, Answers::new())
    }

    /// Resume a session from previously collected answers.
    pub fn with_answers(form: &'f Form, answers: Answers) -> Self {
        Self {
            form,
            answers,
            skipped: HashSet::new(),
        }
    }

    pub fn form(&self) -> &'f Form {
        self.form
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn into_answers(self) -> Answers {
        self.answers
    }

    fn lookup(&self, id: &QuestionId) -> Result<&'f Question, SessionError> {
        self.form
            .question(id)
            .ok_or_else(|| SessionError::UnknownQuestion(id.clone()))
    }

    /// Record an answer for a question, replacing any earlier one.
    ///
    /// Required questions refuse blank values, so a required question is
    /// either still pending or really answered.
    pub fn answer(
        &mut self,
        id: impl Into<QuestionId>,
        value: impl Into<AnswerValue>,
    ) -> Result<(), SessionError> {
        let id = id.into();
        let question = self.lookup(&id)?;
        if !question.kind().collects_answer() {
            return Err(SessionError::NotAnswerable(id));
        }

        let value = value.into();
        if question.is_required() && value.is_blank() {
            return Err(SessionError::BlankAnswer(id));
        }

        tracing::debug!(
            form = %self.form.id,
            question = %id,
            kind = value.type_name(),
            "answer recorded"
        );
        self.skipped.remove(&id);
        self.answers.insert(id, value);
        Ok(())
    }

    /// Move past an optional question without answering it.
    pub fn skip(&mut self, id: impl Into<QuestionId>) -> Result<(), SessionError> {
        let id = id.into();
        let question = self.lookup(&id)?;
        if question.is_required() {
            return Err(SessionError::RequiredQuestion(id));
        }

        tracing::debug!(form = %self.form.id, question = %id, "question skipped");
        self.skipped.insert(id);
        Ok(())
    }

    /// Navigation for the current answers.
    pub fn navigation(&self) -> Navigation<'f> {
        navigator::navigate(self.form.questions(), &self.answers)
    }

    /// Visible questions for the current answers.
    pub fn visible(&self) -> Vec<&'f Question> {
        self.navigation().into_visible()
    }

    /// The next question to put in front of the respondent.
    ///
    /// This is the first visible question that takes an answer and has been
    /// neither answered nor skipped. A blank answer does not count for a
    /// required question. `None` means the response can be submitted.
    pub fn next_prompt(&self) -> Option<&'f Question> {
        self.navigation()
            .visible()
            .iter()
            .copied()
            .find(|q| q.kind().collects_answer() && self.is_pending(q))
    }

    fn is_pending(&self, question: &Question) -> bool {
        let id = question.id();
        if question.is_required() {
            !self.answers.is_answered(id)
        } else {
            !self.answers.contains(id) && !self.skipped.contains(id)
        }
    }

    /// Whether every visible question has been dealt with.
    pub fn is_complete(&self) -> bool {
        self.next_prompt().is_none()
    }

    /// Visible required questions that still lack a non-blank answer.
    pub fn missing_required(&self) -> Vec<QuestionId> {
        self.navigation()
            .visible()
            .iter()
            .filter(|q| {
                q.is_required() && q.kind().collects_answer() && !self.answers.is_answered(q.id())
            })
            .map(|q| q.id().clone())
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Hand the answers to `sink` and return its receipt.
    ///
    /// Refused while any visible required question is unanswered.
    pub fn submit<S: ResponseSink>(self, sink: &mut S) -> Result<Receipt, SessionError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            tracing::debug!(form = %self.form.id, missing = missing.len(), "submission refused");
            return Err(SessionError::MissingRequired(missing));
        }

        let receipt = sink
            .record(&self.form.id, self.answers)
            .map_err(SessionError::sink)?;
        tracing::info!(form = %receipt.form_id, serial = receipt.serial, "response submitted");
        Ok(receipt)
    }

    /// Put every remaining prompt to `respondent` until nothing is left to ask.
    ///
    /// A question is only presented again when its previous round was refused,
    /// and a refusal ends the run, so this terminates for any form.
    pub fn run<R: Respondent>(mut self, respondent: &R) -> Result<Self, SessionError> {
        while let Some(question) = self.next_prompt() {
            match respondent
                .respond(question, &self.answers)
                .map_err(SessionError::respondent)?
            {
                Some(value) => self.answer(question.id().clone(), value)?,
                None => self.skip(question.id().clone())?,
            }
        }
        Ok(self)
    }
}

/// Collect answers for `form` from `respondent`.
pub fn run_session<R: Respondent>(form: &Form, respondent: &R) -> Result<Answers, SessionError> {
    Session::new(form).run(respondent).map(Session::into_answers)
}
