use branchform_types::{
    Branching, ChoiceOption, ChoiceQuestion, FileUploadQuestion, Form, Question, QuestionKind,
    RankingQuestion, RatingQuestion, SectionBreak, TextQuestion,
};

pub const SHIRT_SIZE: &str = "shirt";
pub const COMMENTS: &str = "comments";

fn options(items: &[(&str, &str)]) -> Vec<ChoiceOption> {
    items
        .iter()
        .map(|(id, text)| ChoiceOption::new(*id, *text))
        .collect()
}

/// Conference registration using every question kind.
///
/// Online attendees skip catering and merchandise; people who are not
/// attending finish right after saying so.
pub fn event_registration() -> Form {
    Form::new(
        "rustconf-registration",
        "Conference registration",
        vec![
            Question::new(
                "welcome",
                "Welcome",
                QuestionKind::Section(SectionBreak {
                    description: Some("Tell us how you are joining.".into()),
                }),
            ),
            Question::new(
                "attending",
                "How will you attend?",
                QuestionKind::SingleChoice(ChoiceQuestion::new(vec![
                    ChoiceOption::new("venue", "In person"),
                    ChoiceOption::new("remote", "Online").branch(Branching::to("topics")),
                    ChoiceOption::new("absent", "Not attending").branch(Branching::end()),
                ])),
            )
            .required()
            .with_branching_enabled(true),
            Question::new(
                "diet",
                "Dietary requirements",
                QuestionKind::MultiChoice(ChoiceQuestion::new(options(&[
                    ("veg", "Vegetarian"),
                    ("vegan", "Vegan"),
                    ("gf", "Gluten-free"),
                ]))),
            ),
            Question::new(
                SHIRT_SIZE,
                "T-shirt size",
                QuestionKind::SingleChoice(ChoiceQuestion::new(options(&[
                    ("s", "S"),
                    ("m", "M"),
                    ("l", "L"),
                ]))),
            )
            .required(),
            Question::new(
                "topics",
                "Rank the tracks by interest",
                QuestionKind::Ranking(RankingQuestion {
                    options: options(&[
                        ("async", "Async"),
                        ("embedded", "Embedded"),
                        ("web", "Web"),
                    ]),
                }),
            ),
            Question::new(
                "about",
                "About you",
                QuestionKind::Section(SectionBreak::default()),
            ),
            Question::new(
                "experience",
                "Rate your Rust experience",
                QuestionKind::Rating(RatingQuestion::new(5)),
            )
            .required(),
            Question::new("photo", "Badge photo", QuestionKind::ImageUpload),
            Question::new(
                "talk",
                "Lightning talk slides",
                QuestionKind::FileUpload(FileUploadQuestion {
                    accept: vec![".pdf".into()],
                    max_size_bytes: Some(10 * 1024 * 1024),
                }),
            ),
            Question::new(COMMENTS, "Anything else?", QuestionKind::Text(TextQuestion::multiline())),
        ],
    )
}
