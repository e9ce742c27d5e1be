//! # branchform
//!
//! Branching navigation for forms and surveys. Presentation-agnostic.
//!
//! A form is an ordered list of questions. Questions and the options of choice
//! questions may carry branching rules that jump forward to another question or
//! end the form. Given the answers collected so far, the navigator computes
//! which questions are visible; a session wraps that with answer bookkeeping
//! and submission.
//!
//! ## Usage
//!
//! ```rust
//! use branchform::{
//!     Branching, ChoiceOption, ChoiceQuestion, Form, Question, QuestionKind, ResponseLedger,
//!     Session, TextQuestion,
//! };
//!
//! let form = Form::new(
//!     "feedback",
//!     "Feedback",
//!     vec![
//!         Question::new(
//!             "happy",
//!             "Were you happy with the service?",
//!             QuestionKind::SingleChoice(ChoiceQuestion::new(vec![
//!                 ChoiceOption::new("y", "Yes").branch(Branching::end()),
//!                 ChoiceOption::new("n", "No"),
//!             ])),
//!         )
//!         .required()
//!         .with_branching_enabled(true),
//!         Question::new("why", "What went wrong?", QuestionKind::Text(TextQuestion::multiline())),
//!     ],
//! );
//!
//! let mut session = Session::new(&form);
//! session.answer("happy", "Yes")?;
//! assert_eq!(session.visible().len(), 1);
//! assert!(session.is_complete());
//!
//! let mut ledger = ResponseLedger::new();
//! let receipt = session.submit(&mut ledger)?;
//! assert_eq!(receipt.serial, 1);
//! # Ok::<(), branchform::SessionError>(())
//! ```
//!
//! ## Branching rules
//!
//! - A rule targets `"next"`, `"end"`, or a question id.
//! - Rules are ignored unless the question has branching enabled.
//! - On answered choice questions, the rule of the selected option applies.
//! - Jumps that do not move forward, or name an unknown question, continue
//!   with the next question in authored order.
//!
//! ## Collaborators
//!
//! - `Respondent` - answers one question at a time (`ScriptedRespondent` for tests)
//! - `ResponseSink` - records submissions (`ResponseLedger` keeps them in memory)

// Re-export all types from branchform-types
pub use branchform_types::*;

pub mod navigator;
pub use navigator::{Navigation, Termination, navigate, resolve_target, visible_questions};

mod session;
pub use session::{Session, run_session};

mod ledger;
pub use ledger::ResponseLedger;

pub mod lint;
pub use lint::{BranchIssue, RuleSite, lint};

// Scripted respondent for running forms without user interaction
mod scripted;
pub use scripted::{ScriptError, ScriptedRespondent};
