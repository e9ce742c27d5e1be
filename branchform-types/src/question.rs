use serde::{Deserialize, Serialize};

use crate::{Branching, OptionId, QuestionId};

/// A single question in a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Identifier, unique within the form.
    id: QuestionId,

    /// The prompt text shown to the respondent.
    title: String,

    /// The kind of question (determines input type and which fields exist).
    #[serde(flatten)]
    kind: QuestionKind,

    /// Whether a visible question must be answered before submission.
    #[serde(default)]
    required: bool,

    /// Question-level branching rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    branching: Option<Branching>,

    /// When false, every branching rule on this question is ignored.
    #[serde(default)]
    enable_branching: bool,
}

impl Question {
    /// Create a new optional question without branching.
    pub fn new(id: impl Into<QuestionId>, title: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            required: false,
            branching: None,
            enable_branching: false,
        }
    }

    /// Mark the question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a question-level branching rule and enable branching.
    pub fn branch(mut self, rule: Branching) -> Self {
        self.branching = Some(rule);
        self.enable_branching = true;
        self
    }

    /// Turn branching on or off without touching the configured rules.
    pub fn with_branching_enabled(mut self, enabled: bool) -> Self {
        self.enable_branching = enabled;
        self
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The question-level branching rule, regardless of whether branching is enabled.
    pub fn branching(&self) -> Option<&Branching> {
        self.branching.as_ref()
    }

    pub fn branching_enabled(&self) -> bool {
        self.enable_branching
    }

    /// Options of choice and ranking-like questions; empty for everything else.
    pub fn options(&self) -> &[ChoiceOption] {
        self.kind.options()
    }

    /// Find an option whose display text equals `text` exactly.
    pub fn option_by_text(&self, text: &str) -> Option<&ChoiceOption> {
        self.options().iter().find(|opt| opt.text == text)
    }
}

/// The kind of question, closed over everything the form builder offers.
///
/// Only the choice kinds consult per-option branching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Pick exactly one option.
    SingleChoice(ChoiceQuestion),

    /// Pick any number of options.
    MultiChoice(ChoiceQuestion),

    /// Free text, single or multi-line.
    Text(TextQuestion),

    /// A calendar date.
    Date,

    /// Order the options.
    Ranking(RankingQuestion),

    /// Rank each option on two axes.
    DualRanking(DualRankingQuestion),

    /// Upload an image.
    ImageUpload,

    /// A heading between groups of questions. Collects nothing.
    Section(SectionBreak),

    /// A numeric score on a fixed scale.
    Rating(RatingQuestion),

    /// Upload an arbitrary file.
    FileUpload(FileUploadQuestion),
}

impl QuestionKind {
    /// Whether per-option branching applies to this kind.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::SingleChoice(_) | Self::MultiChoice(_))
    }

    /// Whether the respondent is asked for a value.
    pub fn collects_answer(&self) -> bool {
        !matches!(self, Self::Section(_))
    }

    pub fn options(&self) -> &[ChoiceOption] {
        match self {
            Self::SingleChoice(q) | Self::MultiChoice(q) => &q.options,
            Self::Ranking(q) => &q.options,
            Self::DualRanking(q) => &q.options,
            _ => &[],
        }
    }

    /// Short machine name, matching the JSON `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SingleChoice(_) => "single-choice",
            Self::MultiChoice(_) => "multi-choice",
            Self::Text(_) => "text",
            Self::Date => "date",
            Self::Ranking(_) => "ranking",
            Self::DualRanking(_) => "dual-ranking",
            Self::ImageUpload => "image-upload",
            Self::Section(_) => "section",
            Self::Rating(_) => "rating",
            Self::FileUpload(_) => "file-upload",
        }
    }
}

/// An option of a choice or ranking question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub id: OptionId,

    /// Display text; choice answers store this text.
    pub text: String,

    /// Only honoured on choice questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branching: Option<Branching>,
}

impl ChoiceOption {
    pub fn new(id: impl Into<OptionId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            branching: None,
        }
    }

    /// Attach a branching rule to this option.
    pub fn branch(mut self, rule: Branching) -> Self {
        self.branching = Some(rule);
        self
    }
}

/// Configuration for single- and multi-choice questions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
}

impl ChoiceQuestion {
    pub fn new(options: Vec<ChoiceOption>) -> Self {
        Self { options }
    }
}

/// Configuration for a free-text question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextQuestion {
    /// Render as a textarea instead of a single line.
    #[serde(default)]
    pub multiline: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl TextQuestion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn multiline() -> Self {
        Self {
            multiline: true,
            placeholder: None,
        }
    }
}

/// Configuration for a ranking question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingQuestion {
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
}

/// Configuration for a dual-field ranking question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DualRankingQuestion {
    #[serde(default)]
    pub options: Vec<ChoiceOption>,

    /// Label of the first ranking axis.
    pub first_label: String,

    /// Label of the second ranking axis.
    pub second_label: String,
}

/// A heading that separates groups of questions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionBreak {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Configuration for a rating question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingQuestion {
    /// Highest selectable score; the scale starts at 1.
    #[serde(default = "RatingQuestion::default_max")]
    pub max: u8,
}

impl RatingQuestion {
    fn default_max() -> u8 {
        5
    }

    pub fn new(max: u8) -> Self {
        Self { max }
    }
}

impl Default for RatingQuestion {
    fn default() -> Self {
        Self::new(Self::default_max())
    }
}

/// Configuration for a file upload question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadQuestion {
    /// Accepted file extensions or MIME types; empty accepts anything.
    #[serde(default)]
    pub accept: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size_bytes: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_kinds() {
        assert!(QuestionKind::SingleChoice(ChoiceQuestion::default()).is_choice());
        assert!(QuestionKind::MultiChoice(ChoiceQuestion::default()).is_choice());
        assert!(!QuestionKind::Ranking(RankingQuestion::default()).is_choice());
        assert!(!QuestionKind::Date.is_choice());
    }

    #[test]
    fn section_collects_nothing() {
        assert!(!QuestionKind::Section(SectionBreak::default()).collects_answer());
        assert!(QuestionKind::ImageUpload.collects_answer());
    }

    #[test]
    fn branch_enables_branching() {
        let q = Question::new("q1", "Name?", QuestionKind::Text(TextQuestion::new()))
            .branch(Branching::end());
        assert!(q.branching_enabled());
        assert!(q.branching().is_some_and(|b| b.target().is_end()));
    }

    #[test]
    fn option_lookup_is_exact() {
        let q = Question::new(
            "q1",
            "Continue?",
            QuestionKind::SingleChoice(ChoiceQuestion::new(vec![
                ChoiceOption::new("o1", "Yes"),
                ChoiceOption::new("o2", "No"),
            ])),
        );
        assert_eq!(q.option_by_text("No").map(|o| o.id.as_str()), Some("o2"));
        assert!(q.option_by_text("yes").is_none());
    }

    #[test]
    fn json_question_document() {
        let json = r#"{
            "id": "q1",
            "title": "Do you own a pet?",
            "type": "single-choice",
            "required": true,
            "enableBranching": true,
            "options": [
                {"id": "o1", "text": "Yes", "branching": {"nextQuestionId": "q3"}},
                {"id": "o2", "text": "No", "branching": {"nextQuestionId": "next"}}
            ]
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();

        assert!(q.is_required());
        assert!(q.branching_enabled());
        assert_eq!(q.kind().name(), "single-choice");
        assert_eq!(q.options().len(), 2);
        assert_eq!(
            q.options()[0].branching.as_ref().map(|b| b.target().to_string()),
            Some("q3".to_string())
        );
    }

    #[test]
    fn json_defaults() {
        let q: Question =
            serde_json::from_str(r#"{"id": "r", "title": "Rate us", "type": "rating"}"#).unwrap();
        assert!(!q.is_required());
        assert!(!q.branching_enabled());
        assert_eq!(q.kind(), &QuestionKind::Rating(RatingQuestion::new(5)));
    }
}
