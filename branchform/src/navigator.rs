//! Branching navigation over a form's authored question order.
//!
//! Given the authored questions and a snapshot of the answers so far, the
//! navigator walks a cursor from the first question and decides after each one
//! where to go next. Only forward jumps are taken: a rule that points at the
//! current question, an earlier one, or an id that does not exist falls back to
//! the next question in authored order. Every question is therefore visited at
//! most once and the walk always terminates.

use crate::{Answers, BranchTarget, Question, QuestionId};

/// How a navigation pass stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// The cursor ran past the last question.
    Exhausted,

    /// An `"end"` target fired on the given question.
    Ended { at: QuestionId },
}

/// Result of one navigation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation<'a> {
    visible: Vec<&'a Question>,
    termination: Termination,
}

impl<'a> Navigation<'a> {
    /// Questions to show, in display order.
    pub fn visible(&self) -> &[&'a Question] {
        &self.visible
    }

    pub fn into_visible(self) -> Vec<&'a Question> {
        self.visible
    }

    pub fn termination(&self) -> &Termination {
        &self.termination
    }

    /// Whether an explicit `"end"` rule cut the form short.
    pub fn ended_early(&self) -> bool {
        matches!(self.termination, Termination::Ended { .. })
    }

    /// Whether the question is part of the current path.
    pub fn is_visible(&self, id: &QuestionId) -> bool {
        self.visible.iter().any(|q| q.id() == id)
    }
}

/// Decide where navigation goes after `question`, given the current answers.
///
/// - Branching disabled: `Next`.
/// - Choice question with an answer: the rule on the option whose text equals
///   the answer, or `Next` when that option has no rule or no option matches.
///   The question-level rule is not consulted in that case.
/// - Otherwise the question-level rule, or `Next` when there is none.
pub fn resolve_target(question: &Question, answers: &Answers) -> BranchTarget {
    if !question.branching_enabled() {
        return BranchTarget::Next;
    }

    if question.kind().is_choice()
        && let Some(answer) = answers.get(question.id())
    {
        let option = answer.as_text().and_then(|text| question.option_by_text(text));
        if option.is_none() {
            tracing::debug!(
                question = %question.id(),
                answer = ?answer,
                "answer matches no option, continuing sequentially"
            );
        }
        return option
            .and_then(|opt| opt.branching.as_ref())
            .map(|rule| rule.next.clone())
            .unwrap_or_default();
    }

    question
        .branching()
        .map(|rule| rule.next.clone())
        .unwrap_or_default()
}

/// Walk `questions` under `answers` and report the visible path and how it ended.
pub fn navigate<'a>(questions: &'a [Question], answers: &Answers) -> Navigation<'a> {
    let mut visible = Vec::new();
    let mut cursor = 0;

    while let Some(question) = questions.get(cursor) {
        visible.push(question);

        let target = resolve_target(question, answers);
        tracing::trace!(question = %question.id(), %target, "resolved branch target");

        cursor = match target {
            BranchTarget::End => {
                return Navigation {
                    visible,
                    termination: Termination::Ended {
                        at: question.id().clone(),
                    },
                };
            }
            BranchTarget::Next => cursor + 1,
            BranchTarget::Question(id) => match questions.iter().position(|q| q.id() == &id) {
                Some(index) if index > cursor => index,
                Some(_) => {
                    tracing::debug!(
                        question = %question.id(),
                        target = %id,
                        "backward branch ignored, continuing sequentially"
                    );
                    cursor + 1
                }
                None => {
                    tracing::debug!(
                        question = %question.id(),
                        target = %id,
                        "branch target not in form, continuing sequentially"
                    );
                    cursor + 1
                }
            },
        };
    }

    Navigation {
        visible,
        termination: Termination::Exhausted,
    }
}

/// The questions to display for the given answers, in order.
pub fn visible_questions<'a>(questions: &'a [Question], answers: &Answers) -> Vec<&'a Question> {
    navigate(questions, answers).into_visible()
}
