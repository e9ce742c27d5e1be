use branchform_types::{
    Branching, ChoiceOption, ChoiceQuestion, Form, Question, QuestionKind, RatingQuestion,
    TextQuestion,
};

/// Post-purchase feedback.
///
/// Paths through the form:
/// - "Very satisfied": `satisfied`, `recommend`
/// - "Satisfied": `satisfied`, `liked`, `recommend`
/// - "Unsatisfied", no contact: `satisfied`, `complaint`, `contact_ok`
/// - "Unsatisfied", contact: `satisfied`, `complaint`, `contact_ok`, `email`, `recommend`
pub fn customer_feedback() -> Form {
    Form::new(
        "customer-feedback",
        "How did we do?",
        vec![
            Question::new(
                "satisfied",
                "How satisfied are you with your purchase?",
                QuestionKind::SingleChoice(ChoiceQuestion::new(vec![
                    ChoiceOption::new("very", "Very satisfied").branch(Branching::to("recommend")),
                    ChoiceOption::new("ok", "Satisfied").branch(Branching::next()),
                    ChoiceOption::new("unhappy", "Unsatisfied").branch(Branching::to("complaint")),
                ])),
            )
            .required()
            .with_branching_enabled(true),
            Question::new(
                "liked",
                "What did you like most?",
                QuestionKind::Text(TextQuestion::new()),
            )
            .branch(Branching::to("recommend")),
            Question::new(
                "complaint",
                "What went wrong?",
                QuestionKind::Text(TextQuestion::multiline()),
            )
            .required(),
            Question::new(
                "contact_ok",
                "May we contact you about this?",
                QuestionKind::SingleChoice(ChoiceQuestion::new(vec![
                    ChoiceOption::new("yes", "Yes"),
                    ChoiceOption::new("no", "No").branch(Branching::end()),
                ])),
            )
            .required()
            .with_branching_enabled(true),
            Question::new("email", "Your email address", QuestionKind::Text(TextQuestion::new()))
                .required(),
            Question::new(
                "recommend",
                "How likely are you to recommend us?",
                QuestionKind::Rating(RatingQuestion::new(10)),
            )
            .required(),
        ],
    )
    .with_description("Takes about a minute.")
}
