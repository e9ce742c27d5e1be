use crate::{AnswerValue, Answers, FormId, Question, Receipt};

/// Trait for whoever answers the questions of a session.
///
/// A respondent is shown one question at a time together with the answers
/// given so far, and returns either an answer or `None` to skip the question.
/// Interactive frontends, scripted test drivers and replay tools all implement
/// this.
pub trait Respondent {
    /// The error type for this respondent.
    type Error: Into<anyhow::Error>;

    /// Answer a single question.
    ///
    /// # Arguments
    /// * `question` - The question being presented
    /// * `answers` - All answers collected so far
    ///
    /// # Returns
    /// * `Ok(Some(value))` to answer
    /// * `Ok(None)` to skip (only honoured for optional questions)
    /// * `Err` on cancellation or failure
    fn respond(
        &self,
        question: &Question,
        answers: &Answers,
    ) -> Result<Option<AnswerValue>, Self::Error>;
}

/// Trait for the collaborator that persists submitted responses.
///
/// Implementations assign a serial number that increases monotonically per
/// form and stamp the submission time.
pub trait ResponseSink {
    /// The error type for this sink.
    type Error: Into<anyhow::Error>;

    /// Record a finalized answer map for `form` and return its receipt.
    fn record(&mut self, form: &FormId, answers: Answers) -> Result<Receipt, Self::Error>;
}
