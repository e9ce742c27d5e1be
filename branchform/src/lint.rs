//! Authoring checks for branching rules.
//!
//! Navigation never fails on a bad rule; it quietly continues with the next
//! question. These checks surface such rules to the form author instead.

use std::fmt;

use crate::{BranchTarget, Branching, Form, OptionId, QuestionId};

/// Where a branching rule is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSite {
    /// The question-level rule.
    Question(QuestionId),

    /// The rule on one option of a choice question.
    Option {
        question: QuestionId,
        option: OptionId,
    },
}

impl fmt::Display for RuleSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Question(id) => write!(f, "question '{id}'"),
            Self::Option { question, option } => {
                write!(f, "option '{option}' of question '{question}'")
            }
        }
    }
}

/// A branching rule that navigation will not follow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BranchIssue {
    #[error("{from} branches to '{target}', which is not in the form")]
    Dangling { from: RuleSite, target: QuestionId },

    /// Targets the question itself or an earlier one.
    #[error("{from} branches back to '{target}'; only forward jumps are followed")]
    Backward { from: RuleSite, target: QuestionId },
}

/// Report every active branching rule in `form` that navigation would ignore.
///
/// Questions with branching disabled are not checked. Option rules are only
/// checked on choice questions, the only place they take effect.
pub fn lint(form: &Form) -> Vec<BranchIssue> {
    let mut issues = Vec::new();

    for (index, question) in form.questions().iter().enumerate() {
        if !question.branching_enabled() {
            continue;
        }

        let mut check = |from: RuleSite, rule: &Branching| {
            let BranchTarget::Question(target) = rule.target() else {
                return;
            };
            match form.position(target) {
                None => issues.push(BranchIssue::Dangling {
                    from,
                    target: target.clone(),
                }),
                Some(to) if to <= index => issues.push(BranchIssue::Backward {
                    from,
                    target: target.clone(),
                }),
                Some(_) => {}
            }
        };

        if let Some(rule) = question.branching() {
            check(RuleSite::Question(question.id().clone()), rule);
        }

        if question.kind().is_choice() {
            for option in question.options() {
                if let Some(rule) = &option.branching {
                    check(
                        RuleSite::Option {
                            question: question.id().clone(),
                            option: option.id.clone(),
                        },
                        rule,
                    );
                }
            }
        }
    }

    for issue in &issues {
        tracing::debug!(form = %form.id, %issue, "branching issue");
    }
    issues
}
