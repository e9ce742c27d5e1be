use crate::{OptionId, QuestionId};

/// Error type for loading and checking form definitions.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The document is not valid form JSON.
    #[error("Invalid form document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    #[error("Duplicate option id '{option}' in question '{question}'")]
    DuplicateOption {
        question: QuestionId,
        option: OptionId,
    },
}

/// Error type for response session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No question with id '{0}' in this form")]
    UnknownQuestion(QuestionId),

    /// Section breaks and other display-only entries take no answer.
    #[error("Question '{0}' does not take an answer")]
    NotAnswerable(QuestionId),

    #[error("Question '{0}' is required and cannot be skipped")]
    RequiredQuestion(QuestionId),

    #[error("Question '{0}' is required and cannot be answered with a blank value")]
    BlankAnswer(QuestionId),

    #[error("Required questions are unanswered: {}", format_ids(.0))]
    MissingRequired(Vec<QuestionId>),

    /// The respondent collaborator failed (I/O, UI crash, missing script entry).
    #[error("Respondent error: {0}")]
    Respondent(#[source] anyhow::Error),

    /// The response sink failed to record the submission.
    #[error("Response sink error: {0}")]
    Sink(#[source] anyhow::Error),
}

impl SessionError {
    /// Create a respondent error from any error type.
    pub fn respondent(err: impl Into<anyhow::Error>) -> Self {
        Self::Respondent(err.into())
    }

    /// Create a sink error from any error type.
    pub fn sink(err: impl Into<anyhow::Error>) -> Self {
        Self::Sink(err.into())
    }

    /// Check if submission was refused because of unanswered required questions.
    pub fn is_missing_required(&self) -> bool {
        matches!(self, Self::MissingRequired(_))
    }
}

fn format_ids(ids: &[QuestionId]) -> String {
    ids.iter()
        .map(QuestionId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
