use std::fmt;

use serde::{Deserialize, Serialize};

use crate::QuestionId;

/// Where navigation goes after a question.
///
/// In JSON form documents this is a plain string: `"next"` and `"end"` are
/// sentinels, anything else names a question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BranchTarget {
    /// Fall through to the next question in authored order.
    #[default]
    Next,

    /// Terminate the form; nothing after the current question is shown.
    End,

    /// Jump to a specific question.
    Question(QuestionId),
}

impl BranchTarget {
    pub const NEXT: &'static str = "next";
    pub const END: &'static str = "end";

    /// Parse a raw target string.
    pub fn parse(raw: &str) -> Self {
        match raw {
            Self::NEXT => Self::Next,
            Self::END => Self::End,
            id => Self::Question(QuestionId::new(id)),
        }
    }

    /// Jump to the given question.
    pub fn question(id: impl Into<QuestionId>) -> Self {
        Self::Question(id.into())
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }

    /// The question this target jumps to, if it is a jump.
    pub fn question_id(&self) -> Option<&QuestionId> {
        match self {
            Self::Question(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for BranchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str(Self::NEXT),
            Self::End => f.write_str(Self::END),
            Self::Question(id) => write!(f, "{id}"),
        }
    }
}

impl From<String> for BranchTarget {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for BranchTarget {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<BranchTarget> for String {
    fn from(target: BranchTarget) -> Self {
        target.to_string()
    }
}

impl From<QuestionId> for BranchTarget {
    fn from(id: QuestionId) -> Self {
        Self::Question(id)
    }
}

/// A branching rule attached to a question or to one of its options.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Branching {
    #[serde(rename = "nextQuestionId")]
    pub next: BranchTarget,
}

impl Branching {
    pub fn new(next: impl Into<BranchTarget>) -> Self {
        Self { next: next.into() }
    }

    /// Rule that falls through sequentially.
    pub fn next() -> Self {
        Self::new(BranchTarget::Next)
    }

    /// Rule that terminates the form.
    pub fn end() -> Self {
        Self::new(BranchTarget::End)
    }

    /// Rule that jumps to a question.
    pub fn to(id: impl Into<QuestionId>) -> Self {
        Self::new(BranchTarget::question(id))
    }

    pub fn target(&self) -> &BranchTarget {
        &self.next
    }
}
