//! Core types for the branchform crate.
//!
//! This crate provides the foundational types for defining forms with branching:
//! - `Form` - The top-level form structure, loadable from JSON
//! - `Question` and `QuestionKind` - Individual questions and their types
//! - `Branching` and `BranchTarget` - Rules that redirect navigation
//! - `Answers` and `AnswerValue` - Collected data keyed by question id
//! - `Respondent` and `ResponseSink` traits - For answering and persisting

mod ids;
pub use ids::{FormId, OptionId, QuestionId};

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{AnswerError, Answers};

mod branching;
pub use branching::{BranchTarget, Branching};

mod question;
pub use question::{
    ChoiceOption, ChoiceQuestion, DualRankingQuestion, FileUploadQuestion, Question, QuestionKind,
    RankingQuestion, RatingQuestion, SectionBreak, TextQuestion,
};

mod form;
pub use form::Form;

mod receipt;
pub use receipt::{Receipt, StoredResponse};

mod error;
pub use error::{FormError, SessionError};

mod traits;
pub use traits::{ResponseSink, Respondent};
